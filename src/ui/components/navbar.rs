use crate::ui::Route;
use dioxus::prelude::*;

use super::dialog::GlobalDialog;

/// Layout shared by every route
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "bg-gray-800 text-white px-6 py-4 flex items-center gap-6",
            span { class: "font-bold text-lg mr-4", "marquee" }
            Link { to: Route::Movies {}, class: "hover:text-blue-300 transition-colors", "Movies" }
            Link { to: Route::NewMovie {}, class: "hover:text-blue-300 transition-colors", "Add Movie" }
        }
        Outlet::<Route> {}
        GlobalDialog {}
    }
}
