use crate::components::{PlayerSignal, Route};
use dioxus::prelude::*;

/// One card per manifest folder. Choosing a card routes to that folder.
#[component]
pub fn CardShelf() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let (folders, active) = {
        let controller = player.read();
        (
            controller.manifest().folders().to_vec(),
            controller.state().folder.clone(),
        )
    };

    rsx! {
        div { class: "cardContainer",
            for folder in folders {
                FolderCard {
                    key: "{folder.name}",
                    selected: active.as_deref() == Some(folder.name.as_str()),
                    track_count: folder.files.len(),
                    name: folder.name.clone(),
                }
            }
        }
    }
}

fn track_count_label(count: usize) -> String {
    match count {
        1 => "1 song".to_string(),
        n => format!("{n} songs"),
    }
}

#[component]
fn FolderCard(name: String, track_count: usize, selected: bool) -> Element {
    let target = name.clone();
    let count_label = track_count_label(track_count);

    rsx! {
        div {
            class: if selected { "card selected" } else { "card" },
            "data-folder": "{name}",
            onclick: move |_| {
                navigator().push(Route::Folder { name: target.clone() });
            },
            div { class: "play",
                img { src: "./svg/play.svg", alt: "Play" }
            }
            h2 { "{name}" }
            p { "{count_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(track_count_label(0), "0 songs");
        assert_eq!(track_count_label(1), "1 song");
        assert_eq!(track_count_label(12), "12 songs");
    }
}
