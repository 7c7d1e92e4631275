use crate::components::{
    dispatch, library_view, menu_view, no_songs_hint, LibraryView, MenuSignal, PlayerSignal,
    TrackRow,
};
use dioxus::prelude::*;

/// Slide-in library panel listing the tracks of the active folder.
#[component]
pub fn LibraryPanel() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let mut menu_open = use_context::<MenuSignal>().0;
    let menu = menu_view(menu_open());
    let panel_style = format!("left: {}", menu.panel_left);
    let close_style = format!("display: {}", menu.close_display);

    let list = match library_view(&*player.read()) {
        LibraryView::Pending => rsx! {},
        LibraryView::NoSongs { folder } => {
            let hint = no_songs_hint(&folder);
            rsx! {
                li { class: "no-songs",
                    div { class: "info",
                        div { "No songs found" }
                        div { "{hint}" }
                    }
                }
            }
        }
        LibraryView::Tracks(rows) => rsx! {
            for (index , row) in rows.into_iter().enumerate() {
                TrackItem { key: "{index}", row }
            }
        },
    };

    rsx! {
        div {
            class: "left",
            style: panel_style,
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            div { class: "home",
                button {
                    class: "close-menu",
                    r#type: "button",
                    style: close_style,
                    onclick: move |_| menu_open.set(false),
                    img {
                        src: "close.svg",
                        alt: "Close menu",
                        width: "18",
                        height: "18",
                    }
                }
                h2 { "Your Library" }
            }
            div { class: "songList",
                ul { {list} }
            }
        }
    }
}

#[component]
fn TrackItem(row: TrackRow) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let name = row.name.clone();

    rsx! {
        li {
            class: if row.playing { "playing" } else { "" },
            "data-file": "{row.name}",
            onclick: move |_| {
                dispatch(player, |p| p.play(&name));
            },
            img {
                class: "invert",
                src: "./svg/music.svg",
                alt: "music icon",
            }
            div { class: "info",
                div { "{row.display_name}" }
                div { "Click to play" }
            }
            div { class: "playnow",
                span { "Play Now" }
                img {
                    class: "invert",
                    src: "./svg/play.svg",
                    alt: "play icon",
                }
            }
        }
    }
}
