use crate::backend::MovieBackend;
use crate::list::{MovieList, DELETE_PROMPT, EMPTY_MESSAGE};
use crate::movies::MovieRecord;
use crate::ui::components::dialog_context::{ConfirmPrompt, DialogContext};
use crate::ui::{use_app_context, Route};
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Persisted movies page
#[component]
pub fn Movies() -> Element {
    debug!("Component rendering");
    let app = use_app_context();
    let dialog = use_context::<DialogContext>();
    let navigator = use_navigator();
    let mut list = use_signal(MovieList::new);

    // Fetch on mount
    use_effect({
        let backend = app.backend.clone();
        move || {
            let backend = backend.clone();
            list.write().begin_load();
            spawn(async move {
                let result = backend.list_movies().await;
                list.write().finish_load(result);
            });
        }
    });

    let on_delete = use_callback(move |movie_id: i64| {
        let backend = app.backend.clone();
        let session = app.session.clone();
        let prompt = ConfirmPrompt::new("Delete Movie?", DELETE_PROMPT).confirm_label("Delete");

        dialog.ask(prompt, move || {
            let mut list = list;
            let credential = session.current_token();
            let request = list
                .write()
                .begin_delete(movie_id, true, credential.as_deref());
            match request {
                Ok(Some(request)) => {
                    let backend = backend.clone();
                    spawn(async move {
                        let result = request.send(&backend).await;
                        list.write().finish_delete(request.movie_id, result);
                    });
                }
                Ok(None) => {}
                Err(e) => warn!("Delete of movie {} refused: {}", movie_id, e),
            }
        });
    });

    let state = list();

    rsx! {
        div { class: "container mx-auto p-6",
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-3xl font-bold text-white", "Movie List" }
                button {
                    class: "bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                    onclick: move |_| {
                        navigator.push(Route::NewMovie {});
                    },
                    "+ Add New Movie"
                }
            }

            if let Some(err) = state.error() {
                div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4 flex justify-between",
                    p { "{err}" }
                    button {
                        class: "text-sm underline",
                        onclick: move |_| list.write().dismiss_error(),
                        "Dismiss"
                    }
                }
            }

            if state.is_loading() {
                div { class: "flex justify-center items-center py-12",
                    div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
                    p { class: "ml-4 text-gray-300", "Loading movies..." }
                }
            } else if state.is_empty() {
                div { class: "text-center py-12 text-gray-400", "{EMPTY_MESSAGE}" }
            } else {
                table { class: "w-full border-collapse bg-gray-800 rounded-lg shadow-lg text-left",
                    thead {
                        tr { class: "bg-gray-700",
                            th { class: "px-4 py-3 text-xs font-medium text-gray-300 uppercase tracking-wider",
                                "ID"
                            }
                            th { class: "px-4 py-3 text-xs font-medium text-gray-300 uppercase tracking-wider",
                                "Title"
                            }
                            th { class: "px-4 py-3 text-xs font-medium text-gray-300 uppercase tracking-wider",
                                "Actions"
                            }
                        }
                    }
                    tbody { class: "divide-y divide-gray-700",
                        for movie in state.movies().iter().cloned() {
                            MovieRow {
                                key: "{movie.id}",
                                deleting: state.is_deleting(movie.id),
                                movie,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MovieRow(movie: MovieRecord, deleting: bool, on_delete: EventHandler<i64>) -> Element {
    let movie_id = movie.id;

    rsx! {
        tr { class: "hover:bg-gray-700",
            td { class: "px-4 py-3 text-sm text-gray-400", "{movie.id}" }
            td { class: "px-4 py-3 text-sm font-medium text-white", "{movie.title}" }
            td { class: "px-4 py-3 text-sm space-x-3",
                button {
                    class: "text-blue-400 hover:text-blue-300 underline",
                    onclick: move |_| {
                        navigator().push(Route::EditMovie { movie_id });
                    },
                    "Edit"
                }
                button {
                    class: "text-red-400 hover:text-red-300 underline",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(movie_id),
                    if deleting {
                        "Deleting..."
                    } else {
                        "Delete"
                    }
                }
            }
        }
    }
}
