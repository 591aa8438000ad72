use crate::ui::components::dialog_context::DialogContext;
use crate::ui::Route;
use dioxus::prelude::*;
use tracing::debug;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(DialogContext::new);

    rsx! {
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen bg-gray-900 text-gray-100", Router::<Route> {} }
    }
}
