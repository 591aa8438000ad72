use super::movie_form::MovieForm;
use super::search_panel::SearchPanel;
use crate::editor::{EditorMode, MovieEditor};
use crate::ui::use_app_context;
use dioxus::prelude::*;
use tracing::debug;

/// Add a movie from a TMDB search
#[component]
pub fn NewMovie() -> Element {
    rsx! {
        MovieEditorPage { mode: EditorMode::Create }
    }
}

/// Edit a persisted movie
#[component]
pub fn EditMovie(movie_id: i64) -> Element {
    // Keyed so switching between records starts from a fresh editor
    rsx! {
        MovieEditorPage { key: "{movie_id}", mode: EditorMode::Edit { movie_id } }
    }
}

#[component]
pub fn MovieEditorPage(mode: EditorMode) -> Element {
    let app = use_app_context();
    let mut editor = use_signal(move || MovieEditor::new(mode));

    use_effect({
        let backend = app.backend.clone();
        move || {
            let Some(request) = editor.write().begin_load() else {
                return;
            };
            debug!("Loading movie {} for editing", request.movie_id);
            let backend = backend.clone();
            spawn(async move {
                let result = request.send(&backend).await;
                editor.write().finish_load(result);
            });
        }
    });

    let state = editor();

    rsx! {
        div { class: "container mx-auto p-6 max-w-3xl",
            h1 { class: "text-3xl font-bold text-white mb-6", "{state.heading()}" }

            if let Some(error) = state.error() {
                div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
                    "{error}"
                }
            }
            if state.is_loading() {
                div { class: "text-gray-400 mb-4", "Please wait..." }
            }

            if state.show_search() {
                SearchPanel { editor }
                hr { class: "my-6 border-gray-700" }
            }

            MovieForm { editor }
        }
    }
}
