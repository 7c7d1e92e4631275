//! Player configuration.
//!
//! Defaults match the layout the player is normally served with: a `songs/`
//! directory next to the page holding one sub-directory per folder and a
//! generated `manifest.json`.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "songdeck.config";

/// Stored overrides may name any subset of fields; the rest keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub manifest_url: String,
    pub songs_root: String,
    /// Folder opened when the manifest offers nothing better.
    pub fallback_folder: String,
    pub volume_key: String,
    /// Viewports at or below this width close the menu on outside clicks.
    pub menu_breakpoint_px: f64,
    pub display_name_limit: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            manifest_url: "songs/manifest.json".to_string(),
            songs_root: "songs".to_string(),
            fallback_folder: "CAR".to_string(),
            volume_key: "player-volume".to_string(),
            menu_breakpoint_px: 740.0,
            display_name_limit: 30,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> PlayerConfig {
    LocalStorage::get(CONFIG_KEY).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> PlayerConfig {
    PlayerConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_served_layout() {
        let config = PlayerConfig::default();
        assert_eq!(config.manifest_url, "songs/manifest.json");
        assert_eq!(config.fallback_folder, "CAR");
        assert_eq!(config.volume_key, "player-volume");
        assert_eq!(config.menu_breakpoint_px, 740.0);
        assert_eq!(config.display_name_limit, 30);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config: PlayerConfig = serde_json::from_str(r#"{"songs_root":"media"}"#).unwrap();
        assert_eq!(config.songs_root, "media");
        assert_eq!(config.manifest_url, "songs/manifest.json");
        assert_eq!(config.fallback_folder, "CAR");
        assert_eq!(config.volume_key, "player-volume");
        assert_eq!(config.menu_breakpoint_px, 740.0);
        assert_eq!(config.display_name_limit, 30);
    }

    #[test]
    fn empty_override_is_the_default() {
        let config: PlayerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlayerConfig::default());
    }
}
