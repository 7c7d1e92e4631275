//! Playback core: track lists, the controller state machine and the audio
//! source it drives. Nothing in here depends on the page.

pub mod controller;
pub mod output;
pub mod time;
pub mod track;
pub mod volume;

pub use controller::*;
pub use output::*;
pub use time::*;
pub use track::*;
pub use volume::*;

use crate::config::PlayerConfig;
use crate::db::{platform_volume_store, PlatformVolumeStore};

/// Controller wired to the platform's audio source and storage.
pub type Player = PlaybackController<PlatformAudioOutput, PlatformVolumeStore>;

pub fn new_player(config: &PlayerConfig) -> Player {
    PlaybackController::new(
        PlatformAudioOutput::default(),
        platform_volume_store(config),
        config.songs_root.clone(),
        config.display_name_limit,
    )
}
