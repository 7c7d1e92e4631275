use std::rc::Rc;

use crate::components::{dispatch, transport_view, volume_view, PlayerSignal};
use crate::player::parse_volume;
use dioxus::prelude::*;

/// Bottom bar: now playing, seek bar, transport buttons, time and volume.
#[component]
pub fn Playbar() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let transport = transport_view(&*player.read());
    let time_label = transport.time_label.clone();

    rsx! {
        div { class: "playbar",
            div { class: "songinfo",
                if let Some(name) = transport.now_playing.clone() {
                    div { class: "song-name", "{name}" }
                    div { class: "artist-name", "Playing Now" }
                }
            }
            SeekBar { percent: transport.seek_percent }
            div { class: "abovebar",
                div { class: "songbuttons",
                    img {
                        id: "previous",
                        src: "./svg/prevsong.svg",
                        alt: "Previous",
                        onclick: move |_| {
                            dispatch(player, |p| p.previous());
                        },
                    }
                    img {
                        id: "play",
                        src: transport.play_icon,
                        alt: "Play or pause",
                        onclick: move |_| {
                            dispatch(player, |p| p.toggle_pause());
                        },
                    }
                    img {
                        id: "next",
                        src: "./svg/nextsong.svg",
                        alt: "Next",
                        onclick: move |_| {
                            dispatch(player, |p| p.next());
                        },
                    }
                }
                div { class: "songtime", "{time_label}" }
                VolumeControl {}
            }
        }
    }
}

/// Click position relative to the bar width becomes the seek fraction.
#[component]
fn SeekBar(percent: f64) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let mut bar = use_signal(|| None::<Rc<MountedData>>);
    let circle_style = format!("left: {percent}%");

    rsx! {
        div {
            class: "seekbar",
            onmounted: move |evt| bar.set(Some(evt.data())),
            onclick: move |evt: MouseEvent| {
                let offset_x = evt.element_coordinates().x;
                let Some(mounted) = bar() else {
                    return;
                };
                spawn(async move {
                    let Ok(rect) = mounted.get_client_rect().await else {
                        return;
                    };
                    let width = rect.width();
                    if width > 0.0 {
                        dispatch(player, |p| p.seek(offset_x / width));
                    }
                });
            },
            div { class: "circle", style: circle_style }
        }
    }
}

#[component]
fn VolumeControl() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let view = volume_view(player.read().state());
    let value = view.value.to_string();
    let slider_style = format!("background: {}", view.fill);

    rsx! {
        div { class: "volume",
            button {
                id: "volume-btn",
                r#type: "button",
                class: view.button_class(),
                onclick: move |_| {
                    dispatch(player, |p| p.toggle_mute());
                },
                img { src: view.icon(), alt: "Volume" }
            }
            input {
                id: "volume-slider",
                r#type: "range",
                min: "0",
                max: "100",
                value,
                style: slider_style,
                oninput: move |evt: FormEvent| {
                    if let Some(volume) = parse_volume(&evt.value()) {
                        dispatch(player, move |p| p.set_volume(i64::from(volume)));
                    }
                },
            }
        }
    }
}
