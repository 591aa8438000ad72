pub mod app;
pub mod dialog;
pub mod dialog_context;
pub mod movie_editor;
pub mod movie_list;
pub mod navbar;

pub use app::App;
pub use dialog_context::{ConfirmPrompt, DialogContext};
pub use movie_editor::{EditMovie, NewMovie};
pub use movie_list::Movies;
pub use navbar::Navbar;
