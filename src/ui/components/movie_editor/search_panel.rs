use crate::editor::{MovieEditor, SearchRequest};
use crate::movies::{mapping, SearchResult};
use crate::ui::use_app_context;
use dioxus::prelude::*;
use tracing::debug;

/// TMDB search box, result list and pager
#[component]
pub fn SearchPanel(editor: Signal<MovieEditor>) -> Element {
    let app = use_app_context();
    let mut editor = editor;

    let run = use_callback(move |request: SearchRequest| {
        let tmdb = app.tmdb.clone();
        spawn(async move {
            let result = request.send(&tmdb).await;
            editor.write().finish_search(request.token, result);
        });
    });

    let submit = move || {
        let mut editor = editor;
        if !editor.peek().can_edit_query() {
            return;
        }
        let request = editor.write().submit_search();
        match request {
            Ok(request) => run.call(request),
            Err(e) => debug!("Search not started: {}", e),
        }
    };

    let state = editor();

    rsx! {
        div { class: "mb-6",
            div { class: "flex gap-2 mb-4",
                input {
                    class: "flex-1 p-3 bg-gray-800 border border-gray-600 text-white rounded-lg",
                    placeholder: "Search for a movie...",
                    disabled: !state.can_edit_query(),
                    value: "{state.query()}",
                    oninput: move |event: FormEvent| {
                        editor.write().set_query(event.value());
                    },
                    onkeydown: move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                    disabled: !state.can_search(),
                    onclick: move |_| submit(),
                    "{state.search_label()}"
                }
            }

            if !state.results().is_empty() {
                div { class: "bg-gray-800 rounded-lg divide-y divide-gray-700",
                    for result in state.results().iter().cloned() {
                        SearchResultRow {
                            key: "{result.id}",
                            selected: state.is_selected(result.id),
                            result,
                            on_select: move |result: SearchResult| editor.write().select(result),
                        }
                    }
                }
            }

            if state.show_pagination() {
                div { class: "flex items-center justify-center gap-4 mt-4 text-gray-300",
                    button {
                        class: "px-3 py-1 bg-gray-700 rounded hover:bg-gray-600 disabled:opacity-50",
                        disabled: !state.can_go_previous(),
                        onclick: move |_| {
                            let request = editor.write().previous_page();
                            if let Some(request) = request {
                                run.call(request);
                            }
                        },
                        "Previous"
                    }
                    span { "Page {state.current_page()} of {state.total_pages()}" }
                    button {
                        class: "px-3 py-1 bg-gray-700 rounded hover:bg-gray-600 disabled:opacity-50",
                        disabled: !state.can_go_next(),
                        onclick: move |_| {
                            let request = editor.write().next_page();
                            if let Some(request) = request {
                                run.call(request);
                            }
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResultRow(
    result: SearchResult,
    selected: bool,
    on_select: EventHandler<SearchResult>,
) -> Element {
    let row_class = if selected {
        "p-3 cursor-pointer bg-blue-900 text-white"
    } else {
        "p-3 cursor-pointer text-gray-200 hover:bg-gray-700"
    };
    let poster = mapping::image_url(result.poster_path.as_deref());
    let year = result.release_date.get(..4).unwrap_or_default().to_string();

    rsx! {
        div {
            class: "{row_class} flex items-center gap-3",
            onclick: {
                let result = result.clone();
                move |_| on_select.call(result.clone())
            },
            if !poster.is_empty() {
                img { class: "w-8 rounded", src: "{poster}" }
            }
            p { class: "flex-1",
                "{result.original_title}"
                if !year.is_empty() {
                    span { class: "ml-2 text-gray-400", "({year})" }
                }
            }
        }
    }
}
