use crate::editor::{MovieEditor, SaveOutcome};
use crate::movies::FormField;
use crate::ui::{use_app_context, Route};
use dioxus::prelude::*;
use tracing::debug;

/// Editable movie fields plus the save button
#[component]
pub fn MovieForm(editor: Signal<MovieEditor>) -> Element {
    let app = use_app_context();
    let navigator = use_navigator();
    let mut editor = editor;

    let on_save = move |_: MouseEvent| {
        let credential = app.session.current_token();
        let request = editor.write().begin_save(credential.as_deref());
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                debug!("Save not sent: {}", e);
                return;
            }
        };

        let backend = app.backend.clone();
        spawn(async move {
            let result = request.send(&backend).await;
            if editor.write().finish_save(result) == SaveOutcome::Saved {
                navigator.push(Route::Movies {});
            }
        });
    };

    let state = editor();
    let form = state.form().clone();

    rsx! {
        div { class: "space-y-4",
            if let Some(poster) = state.poster_url() {
                img { class: "rounded shadow", width: "100", src: "{poster}" }
            }

            FieldInput {
                field: FormField::Title,
                value: form.title,
                on_change: move |value: String| editor.write().update_field(FormField::Title, value),
            }
            div {
                label { class: "block text-sm font-medium text-gray-300 mb-1",
                    "{FormField::Description.label()}"
                }
                textarea {
                    class: "w-full p-2 bg-gray-800 border border-gray-600 text-white rounded",
                    rows: "5",
                    value: "{form.description}",
                    oninput: move |event: FormEvent| {
                        editor.write().update_field(FormField::Description, event.value());
                    },
                }
            }
            FieldInput {
                field: FormField::Popularity,
                value: form.popularity,
                on_change: move |value: String| editor.write().update_field(FormField::Popularity, value),
            }
            FieldInput {
                field: FormField::ReleaseDate,
                value: form.release_date,
                on_change: move |value: String| editor.write().update_field(FormField::ReleaseDate, value),
            }
            FieldInput {
                field: FormField::Rating,
                value: form.rating,
                on_change: move |value: String| editor.write().update_field(FormField::Rating, value),
            }

            button {
                class: "px-6 py-2 bg-green-600 hover:bg-green-700 text-white font-medium rounded disabled:opacity-50",
                disabled: state.is_loading(),
                onclick: on_save,
                "{state.save_label()}"
            }
        }
    }
}

#[component]
fn FieldInput(
    field: FormField,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    let input_type = match field {
        FormField::ReleaseDate => "date",
        f if f.is_numeric() => "number",
        _ => "text",
    };

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-300 mb-1", "{field.label()}" }
            input {
                class: "w-full p-2 bg-gray-800 border border-gray-600 text-white rounded",
                r#type: input_type,
                step: if field.is_numeric() { "any" },
                value: "{value}",
                oninput: move |event: FormEvent| on_change.call(event.value()),
            }
        }
    }
}
