//! Playback controller: the one owner of playback state.
//!
//! The controller never touches the page. It talks to the audio source
//! through [`AudioOutput`], to durable storage through [`VolumeStore`], and
//! reports every command as an [`Outcome`] so callers can see when a
//! request was ignored instead of applied.

use dioxus::logger::tracing::{debug, info, warn};

use super::output::{AudioError, AudioOutput, PlayStart, StartFuture};
use super::track::{Track, TrackList};
use super::volume::{clamp_volume, volume_to_gain, VolumeLevel, DEFAULT_VOLUME};
use crate::api::Manifest;
use crate::db::VolumeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// No tracks in the active folder (or no folder yet).
    Empty,
    /// Tracks listed, nothing loaded.
    Idle,
    Paused,
    Playing,
    /// The last track of the folder played to completion.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoTracks,
    UnknownTrack,
    NothingLoaded,
    AtStart,
    AtEnd,
    DurationUnknown,
    InvalidPosition,
    /// A later `play` replaced the attempt being resolved.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub folder: Option<String>,
    /// Index into the track list, always valid when present.
    pub track: Option<usize>,
    pub status: PlayerStatus,
    pub current_time: f64,
    /// `None` until the source reports a usable duration.
    pub duration: Option<f64>,
    /// Last volume set by the user, independent of mute.
    pub volume: u8,
    pub muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            folder: None,
            track: None,
            status: PlayerStatus::Empty,
            current_time: 0.0,
            duration: None,
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl PlaybackState {
    pub fn is_loaded(&self) -> bool {
        matches!(
            self.status,
            PlayerStatus::Paused | PlayerStatus::Playing | PlayerStatus::Ended
        )
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    /// Value shown on the slider: zero while muted.
    pub fn displayed_volume(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.volume
        }
    }

    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_value(self.displayed_volume())
    }
}

/// A playback start the browser has not answered yet.
pub struct PendingStart {
    pub attempt: u64,
    pub future: StartFuture,
}

pub struct PlaybackController<O, S> {
    songs_root: String,
    display_limit: usize,
    manifest: Manifest,
    tracks: TrackList,
    state: PlaybackState,
    output: O,
    store: S,
    attempt: u64,
    pending_start: Option<PendingStart>,
}

impl<O: AudioOutput, S: VolumeStore> PlaybackController<O, S> {
    /// Build a controller and apply the persisted volume (100 when unset).
    pub fn new(output: O, store: S, songs_root: impl Into<String>, display_limit: usize) -> Self {
        let mut controller = Self {
            songs_root: songs_root.into(),
            display_limit,
            manifest: Manifest::default(),
            tracks: TrackList::default(),
            state: PlaybackState::default(),
            output,
            store,
            attempt: 0,
            pending_start: None,
        };
        let initial = controller.store.load_volume().unwrap_or(DEFAULT_VOLUME);
        controller.set_volume(i64::from(initial));
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn active_track(&self) -> Option<&Track> {
        self.state.track.and_then(|i| self.tracks.get(i))
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_manifest(&mut self, manifest: Manifest) {
        self.manifest = manifest;
    }

    pub fn select_folder(&mut self, name: &str) -> Outcome {
        if self.state.is_loaded() {
            self.output.pause();
        }
        self.supersede_start();

        self.tracks = TrackList::build(
            &self.songs_root,
            name,
            self.manifest.files(name).unwrap_or(&[]),
            self.display_limit,
        );
        self.state.folder = Some(name.to_string());
        self.state.track = None;
        self.state.current_time = 0.0;
        self.state.duration = None;

        if self.tracks.is_empty() {
            info!("No tracks found in folder {name}");
            self.state.status = PlayerStatus::Empty;
            return Outcome::Ignored(IgnoreReason::NoTracks);
        }

        debug!("Selected folder {name} ({} tracks)", self.tracks.len());
        self.state.status = PlayerStatus::Idle;
        Outcome::Applied
    }

    /// Load and start the track whose extension-stripped name is `name`.
    pub fn play(&mut self, name: &str) -> Outcome {
        match self.tracks.position(name) {
            Some(index) => {
                self.load_and_start(index);
                Outcome::Applied
            }
            None => {
                debug!("Ignoring play request for unknown track {name:?}");
                Outcome::Ignored(IgnoreReason::UnknownTrack)
            }
        }
    }

    pub fn toggle_pause(&mut self) -> Outcome {
        match self.state.status {
            PlayerStatus::Playing => {
                self.output.pause();
                self.state.status = PlayerStatus::Paused;
                Outcome::Applied
            }
            PlayerStatus::Paused | PlayerStatus::Ended => {
                self.start_playback();
                Outcome::Applied
            }
            PlayerStatus::Empty | PlayerStatus::Idle => {
                Outcome::Ignored(IgnoreReason::NothingLoaded)
            }
        }
    }

    pub fn next(&mut self) -> Outcome {
        let Some(index) = self.loaded_index() else {
            return Outcome::Ignored(IgnoreReason::NothingLoaded);
        };
        if index + 1 >= self.tracks.len() {
            return Outcome::Ignored(IgnoreReason::AtEnd);
        }
        self.load_and_start(index + 1);
        Outcome::Applied
    }

    pub fn previous(&mut self) -> Outcome {
        let Some(index) = self.loaded_index() else {
            return Outcome::Ignored(IgnoreReason::NothingLoaded);
        };
        if index == 0 {
            return Outcome::Ignored(IgnoreReason::AtStart);
        }
        self.load_and_start(index - 1);
        Outcome::Applied
    }

    /// Natural end of the current track.
    ///
    /// Advances when a successor exists. On the last track the status
    /// becomes `Ended` and `Ignored(AtEnd)` is returned.
    pub fn on_ended(&mut self) -> Outcome {
        match self.next() {
            Outcome::Ignored(IgnoreReason::AtEnd) => {
                info!("Reached the end of {}", self.tracks.folder());
                self.state.status = PlayerStatus::Ended;
                Outcome::Ignored(IgnoreReason::AtEnd)
            }
            outcome => outcome,
        }
    }

    /// Jump to `fraction` (0.0-1.0) of the known duration.
    pub fn seek(&mut self, fraction: f64) -> Outcome {
        if !self.state.is_loaded() {
            return Outcome::Ignored(IgnoreReason::NothingLoaded);
        }
        let Some(duration) = self.state.duration else {
            return Outcome::Ignored(IgnoreReason::DurationUnknown);
        };
        if !fraction.is_finite() {
            return Outcome::Ignored(IgnoreReason::InvalidPosition);
        }
        let position = fraction.clamp(0.0, 1.0) * duration;
        self.output.set_current_time(position);
        self.state.current_time = position;
        Outcome::Applied
    }

    pub fn set_volume(&mut self, value: i64) -> Outcome {
        let volume = clamp_volume(value);
        self.output.set_volume(volume_to_gain(volume));
        self.output.set_muted(false);
        self.store.save_volume(volume);
        self.state.volume = volume;
        self.state.muted = false;
        Outcome::Applied
    }

    /// Mute, or restore the persisted volume (at least 1) when already
    /// silent. Muting leaves the persisted preference alone.
    pub fn toggle_mute(&mut self) -> Outcome {
        if self.state.muted || self.state.volume == 0 {
            let restore = self.store.load_volume().unwrap_or(DEFAULT_VOLUME).max(1);
            return self.set_volume(i64::from(restore));
        }
        self.output.set_muted(true);
        self.state.muted = true;
        Outcome::Applied
    }

    pub fn on_time_update(&mut self, current_time: f64) {
        if current_time.is_finite() {
            self.state.current_time = current_time.max(0.0);
        }
    }

    pub fn on_duration_change(&mut self, duration: f64) {
        self.state.duration = (duration.is_finite() && duration > 0.0).then_some(duration);
    }

    /// The audio element paused on its own, for example from a media key
    /// or an unplugged headset.
    pub fn on_paused(&mut self) {
        if self.state.status == PlayerStatus::Playing {
            debug!("Audio paused outside the player");
            self.state.status = PlayerStatus::Paused;
        }
    }

    /// The audio element resumed on its own. Ignored until a track is loaded.
    pub fn on_playing(&mut self) {
        if matches!(self.state.status, PlayerStatus::Paused | PlayerStatus::Ended) {
            debug!("Audio resumed outside the player");
            self.state.status = PlayerStatus::Playing;
        }
    }

    /// Run `command` and hand back the browser start it left pending, if any.
    pub fn apply<F>(&mut self, command: F) -> (Outcome, Option<PendingStart>)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        let outcome = command(self);
        (outcome, self.take_pending_start())
    }

    /// Hand the pending browser start (if any) to the caller, who awaits it
    /// and reports back through [`resolve_start`](Self::resolve_start).
    pub fn take_pending_start(&mut self) -> Option<PendingStart> {
        self.pending_start.take()
    }

    pub fn resolve_start(&mut self, attempt: u64, result: Result<(), AudioError>) -> Outcome {
        if attempt != self.attempt {
            debug!("Dropping result of superseded playback attempt {attempt}");
            return Outcome::Ignored(IgnoreReason::Superseded);
        }
        if let Err(err) = result {
            self.reject_start(&err);
        }
        Outcome::Applied
    }

    fn loaded_index(&self) -> Option<usize> {
        if self.state.is_loaded() {
            self.state.track
        } else {
            None
        }
    }

    fn load_and_start(&mut self, index: usize) {
        let Some(path) = self.tracks.get(index).map(|t| t.path.clone()) else {
            return;
        };
        self.output.load(&path);
        self.state.track = Some(index);
        self.state.current_time = 0.0;
        self.state.duration = None;
        self.start_playback();
    }

    fn start_playback(&mut self) {
        self.supersede_start();
        self.state.status = PlayerStatus::Playing;
        match self.output.play() {
            PlayStart::Started => {}
            PlayStart::Pending(future) => {
                self.pending_start = Some(PendingStart {
                    attempt: self.attempt,
                    future,
                });
            }
            PlayStart::Rejected(err) => self.reject_start(&err),
        }
    }

    fn supersede_start(&mut self) {
        self.attempt += 1;
        self.pending_start = None;
    }

    fn reject_start(&mut self, err: &AudioError) {
        warn!("Playback failed: {err}");
        if self.state.status == PlayerStatus::Playing {
            self.state.status = PlayerStatus::Paused;
        }
    }
}
