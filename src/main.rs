use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod db;
mod player;

use components::Route;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Songdeck" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
        document::Meta { name: "theme-color", content: "#121212" }
        document::Stylesheet { href: "style.css" }

        Router::<Route> {}
    }
}
