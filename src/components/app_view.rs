//! Routes of the player. Both render inside [`PlayerShell`], which keeps the
//! controller alive across navigation.

use crate::components::PlayerShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PlayerShell)]
        #[route("/")]
        Home {},
        #[route("/folder/:name")]
        Folder { name: String },
}

impl Route {
    /// Folder named by the route, if any. `/` lets the shell pick one.
    pub fn folder(&self) -> Option<String> {
        match self {
            Route::Home {} => None,
            Route::Folder { name } => Some(name.clone()),
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        h1 { class: "section-title", "Playlists" }
    }
}

#[component]
fn Folder(name: String) -> Element {
    rsx! {
        h1 { class: "section-title", "{name}" }
    }
}
