use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Movies {},
    #[route("/movies/form")]
    NewMovie {},
    #[route("/movies/form/:movie_id")]
    EditMovie { movie_id: i64 },
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("marquee")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100, 800))
}
