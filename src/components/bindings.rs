//! Glue between page events and the playback controller.
use dioxus::prelude::*;

use crate::player::{Outcome, PendingStart, Player};

#[cfg(target_arch = "wasm32")]
use crate::player::get_or_create_audio_element;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Shared handle to the page's controller.
#[derive(Clone, Copy)]
pub struct PlayerSignal(pub Signal<Player>);

/// Whether the slide-in library panel is open.
#[derive(Clone, Copy)]
pub struct MenuSignal(pub Signal<bool>);

/// Run a controller command and follow up on any playback start the
/// browser answers asynchronously.
pub fn dispatch<F>(mut player: Signal<Player>, command: F) -> Outcome
where
    F: FnOnce(&mut Player) -> Outcome,
{
    let (outcome, pending) = player.write().apply(command);
    if let Some(pending) = pending {
        await_start(player, pending);
    }
    outcome
}

/// Audio callbacks dispatch with only a runtime guard in place, so the
/// wait runs on the wasm executor instead of a scope task.
#[cfg(target_arch = "wasm32")]
fn await_start(mut player: Signal<Player>, pending: PendingStart) {
    let runtime = Runtime::current();
    wasm_bindgen_futures::spawn_local(async move {
        let PendingStart { attempt, future } = pending;
        let result = future.await;
        let _guard = RuntimeGuard::new(runtime);
        player.write().resolve_start(attempt, result);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn await_start(mut player: Signal<Player>, pending: PendingStart) {
    spawn(async move {
        let PendingStart { attempt, future } = pending;
        let result = future.await;
        player.write().resolve_start(attempt, result);
    });
}

/// Forward `timeupdate`, `durationchange`, `pause`, `play` and `ended` from
/// the audio element into the controller.
#[cfg(target_arch = "wasm32")]
pub fn attach_audio_listeners(player: Signal<Player>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };
    let runtime = Runtime::current();

    let time_cb = {
        let runtime = runtime.clone();
        let mut player = player;
        Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            if let Some(audio) = get_or_create_audio_element() {
                player.write().on_time_update(audio.current_time());
            }
        }) as Box<dyn FnMut()>)
    };
    let duration_cb = {
        let runtime = runtime.clone();
        let mut player = player;
        Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            if let Some(audio) = get_or_create_audio_element() {
                player.write().on_duration_change(audio.duration());
            }
        }) as Box<dyn FnMut()>)
    };
    let pause_cb = {
        let runtime = runtime.clone();
        let mut player = player;
        Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            player.write().on_paused();
        }) as Box<dyn FnMut()>)
    };
    let play_cb = {
        let runtime = runtime.clone();
        let mut player = player;
        Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            player.write().on_playing();
        }) as Box<dyn FnMut()>)
    };
    let ended_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            dispatch(player, |p| p.on_ended());
        }) as Box<dyn FnMut()>)
    };

    audio.set_ontimeupdate(Some(time_cb.as_ref().unchecked_ref()));
    audio.set_ondurationchange(Some(duration_cb.as_ref().unchecked_ref()));
    audio.set_onpause(Some(pause_cb.as_ref().unchecked_ref()));
    audio.set_onplay(Some(play_cb.as_ref().unchecked_ref()));
    audio.set_onended(Some(ended_cb.as_ref().unchecked_ref()));

    time_cb.forget();
    duration_cb.forget();
    pause_cb.forget();
    play_cb.forget();
    ended_cb.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach_audio_listeners(_player: Signal<Player>) {}

#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}

/// Lock page scrolling behind the open menu.
#[cfg(target_arch = "wasm32")]
pub fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.style().set_property("overflow", value);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_body_overflow(_value: &str) {}
