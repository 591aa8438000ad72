mod movie_form;
mod page;
mod search_panel;

pub use page::{EditMovie, MovieEditorPage, NewMovie};
