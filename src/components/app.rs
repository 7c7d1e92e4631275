use std::rc::Rc;

use crate::api::ManifestLoader;
use crate::components::{
    attach_audio_listeners, closes_on_outside_click, menu_view, set_body_overflow,
    viewport_width, CardShelf, LibraryPanel, MenuSignal, Playbar,
    PlayerSignal, Route,
};
use crate::config::load_config;
use crate::player::new_player;
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

#[component]
pub fn PlayerShell() -> Element {
    let config = use_hook(load_config);
    let loader = use_hook({
        let url = config.manifest_url.clone();
        move || Rc::new(ManifestLoader::new(url))
    });
    let player = use_signal({
        let config = config.clone();
        move || new_player(&config)
    });
    let mut menu_open = use_signal(|| false);
    let mut manifest_ready = use_signal(|| false);
    let route = use_route::<Route>();

    // Provide state via context
    use_context_provider(|| config.clone());
    use_context_provider(|| PlayerSignal(player));
    use_context_provider(|| MenuSignal(menu_open));

    use_effect(move || {
        attach_audio_listeners(player);
    });

    // Fetch the manifest once; failures arrive here as an empty manifest.
    use_effect(move || {
        let loader = loader.clone();
        let mut player = player;
        spawn(async move {
            let manifest = loader.load().await;
            player.write().set_manifest(manifest);
            manifest_ready.set(true);
        });
    });

    // Open the folder named by the route, or the manifest's first useful one.
    let fallback_folder = config.fallback_folder.clone();
    let requested_folder = route.folder();
    use_effect(use_reactive(
        (&requested_folder,),
        move |(requested_folder,)| {
            if !manifest_ready() {
                return;
            }
            let folder = requested_folder
                .or_else(|| {
                    player
                        .peek()
                        .manifest()
                        .default_folder()
                        .map(str::to_string)
                })
                .unwrap_or_else(|| fallback_folder.clone());
            if player.peek().state().folder.as_deref() == Some(folder.as_str()) {
                return;
            }
            info!("Opening folder {folder}");
            let mut player = player;
            let outcome = player.write().select_folder(&folder);
            debug!("select_folder({folder}) -> {outcome:?}");
        },
    ));

    use_effect(move || {
        set_body_overflow(menu_view(menu_open()).body_overflow);
    });

    let breakpoint = config.menu_breakpoint_px;
    let menu = menu_view(menu_open());

    rsx! {
        div {
            class: menu.container_class,
            onclick: move |_| {
                if closes_on_outside_click(menu_open(), viewport_width(), breakpoint) {
                    menu_open.set(false);
                }
            },
            LibraryPanel {}
            div { class: "right",
                div { class: "header",
                    button {
                        class: "hamburger",
                        r#type: "button",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            menu_open.set(true);
                        },
                        img {
                            class: "invert",
                            src: "./svg/hamburger.svg",
                            alt: "Open menu",
                        }
                    }
                }
                div { class: "spotifyPlaylists",
                    Outlet::<Route> {}
                    CardShelf {}
                }
                Playbar {}
            }
        }
    }
}
