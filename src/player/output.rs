//! The single audio source the controller drives.
//!
//! In the browser this is one hidden `<audio>` element appended to the body.
//! Host builds use [`NullAudioOutput`], which accepts every command.

use futures_util::future::LocalBoxFuture;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("no audio element available")]
    Unavailable,
}

pub type StartFuture = LocalBoxFuture<'static, Result<(), AudioError>>;

/// Result of asking the output to start playing.
pub enum PlayStart {
    Started,
    /// The browser answers later (the `play()` promise).
    Pending(StartFuture),
    Rejected(AudioError),
}

pub trait AudioOutput {
    /// Point the source at a new URL. Supersedes any in-flight start.
    fn load(&mut self, src: &str);
    fn play(&mut self) -> PlayStart;
    fn pause(&mut self);
    fn set_current_time(&mut self, seconds: f64);
    /// Gain in 0.0-1.0.
    fn set_volume(&mut self, gain: f64);
    fn set_muted(&mut self, muted: bool);
}

#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Debug, Default)]
pub struct NullAudioOutput;

#[cfg(any(test, not(target_arch = "wasm32")))]
impl AudioOutput for NullAudioOutput {
    fn load(&mut self, _src: &str) {}

    fn play(&mut self) -> PlayStart {
        PlayStart::Started
    }

    fn pause(&mut self) {}

    fn set_current_time(&mut self, _seconds: f64) {}

    fn set_volume(&mut self, _gain: f64) {}

    fn set_muted(&mut self, _muted: bool) {}
}

pub const AUDIO_ELEMENT_ID: &str = "songdeck-audio";

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    let name = js_sys::Reflect::get(value, &"name".into())
        .ok()
        .and_then(|v| v.as_string());
    let message = js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string());
    match (name, message) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (None, Some(message)) => message,
        (Some(name), None) => name,
        (None, None) => format!("{value:?}"),
    }
}

/// `<audio>` element backed output. Element lookups are lazy so the output
/// can be built before the document body exists.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct WebAudioOutput;

#[cfg(target_arch = "wasm32")]
impl AudioOutput for WebAudioOutput {
    fn load(&mut self, src: &str) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_src(src);
            audio.load();
        }
    }

    fn play(&mut self) -> PlayStart {
        let Some(audio) = get_or_create_audio_element() else {
            return PlayStart::Rejected(AudioError::Unavailable);
        };
        match audio.play() {
            Ok(promise) => PlayStart::Pending(Box::pin(async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| AudioError::Rejected(describe_js_error(&err)))
            })),
            Err(err) => PlayStart::Rejected(AudioError::Rejected(describe_js_error(&err))),
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_current_time(seconds);
        }
    }

    fn set_volume(&mut self, gain: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(gain.clamp(0.0, 1.0));
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_muted(muted);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformAudioOutput = WebAudioOutput;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformAudioOutput = NullAudioOutput;
