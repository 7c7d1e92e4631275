use crate::config::PlayerConfig;
use crate::player::volume::parse_volume;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Durable home of the user's volume preference (0-100).
pub trait VolumeStore {
    /// `None` when nothing usable is stored.
    fn load_volume(&self) -> Option<u8>;
    fn save_volume(&mut self, volume: u8);
}

/// `localStorage` entry holding the volume as a plain integer string.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserVolumeStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserVolumeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl VolumeStore for BrowserVolumeStore {
    fn load_volume(&self) -> Option<u8> {
        let raw = LocalStorage::raw().get_item(&self.key).ok().flatten()?;
        let volume = parse_volume(&raw);
        if volume.is_none() {
            warn!("Ignoring unreadable stored volume {raw:?}");
        }
        volume
    }

    fn save_volume(&mut self, volume: u8) {
        if let Err(err) = LocalStorage::raw().set_item(&self.key, &volume.to_string()) {
            warn!("Failed to persist volume: {err:?}");
        }
    }
}

/// In-memory store used by host builds and tests. Keeps the raw text so
/// unreadable values behave like they do in the browser.
#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Debug, Clone, Default)]
pub struct MemoryVolumeStore {
    raw: Option<String>,
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl MemoryVolumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    #[cfg(test)]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl VolumeStore for MemoryVolumeStore {
    fn load_volume(&self) -> Option<u8> {
        self.raw.as_deref().and_then(parse_volume)
    }

    fn save_volume(&mut self, volume: u8) {
        self.raw = Some(volume.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformVolumeStore = BrowserVolumeStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformVolumeStore = MemoryVolumeStore;

#[cfg(target_arch = "wasm32")]
pub fn platform_volume_store(config: &PlayerConfig) -> PlatformVolumeStore {
    BrowserVolumeStore::new(config.volume_key.clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_volume_store(_config: &PlayerConfig) -> PlatformVolumeStore {
    MemoryVolumeStore::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_as_text() {
        let mut store = MemoryVolumeStore::new();
        assert_eq!(store.load_volume(), None);
        store.save_volume(42);
        assert_eq!(store.raw(), Some("42"));
        assert_eq!(store.load_volume(), Some(42));
    }

    #[test]
    fn stored_values_are_clamped_or_dropped() {
        assert_eq!(MemoryVolumeStore::with_raw("250").load_volume(), Some(100));
        assert_eq!(MemoryVolumeStore::with_raw("-1").load_volume(), Some(0));
        assert_eq!(MemoryVolumeStore::with_raw("quiet").load_volume(), None);
    }
}
