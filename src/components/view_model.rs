//! What the page should show for a given controller state.
//!
//! Components only copy these values into attributes, which keeps the
//! mapping testable without a renderer.

use crate::db::VolumeStore;
use crate::player::{
    slider_fill, time_label, AudioOutput, PlaybackController, PlaybackState, PlayerStatus,
    TrackList, VolumeLevel,
};

pub const PLAY_ICON: &str = "./svg/play.svg";
pub const PAUSE_ICON: &str = "./svg/pause.svg";

pub fn play_icon(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Playing => PAUSE_ICON,
        _ => PLAY_ICON,
    }
}

/// Position of the seek indicator, in percent of the bar.
pub fn seek_percent(current: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(duration) if duration > 0.0 && current.is_finite() => {
            (current / duration * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    /// Full name, used as `data-file` and for selection.
    pub name: String,
    pub display_name: String,
    pub playing: bool,
}

pub fn track_rows(tracks: &TrackList, active: Option<usize>) -> Vec<TrackRow> {
    tracks
        .tracks()
        .iter()
        .enumerate()
        .map(|(index, track)| TrackRow {
            name: track.name.clone(),
            display_name: track.display_name.clone(),
            playing: active == Some(index),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryView {
    /// Nothing selected yet (manifest still loading).
    Pending,
    NoSongs { folder: String },
    Tracks(Vec<TrackRow>),
}

pub fn no_songs_hint(folder: &str) -> String {
    format!("Add MP3 files to the {folder} folder")
}

pub fn library_view<O: AudioOutput, S: VolumeStore>(
    controller: &PlaybackController<O, S>,
) -> LibraryView {
    let state = controller.state();
    match &state.folder {
        None => LibraryView::Pending,
        Some(folder) if controller.tracks().is_empty() => LibraryView::NoSongs {
            folder: folder.clone(),
        },
        Some(_) => LibraryView::Tracks(track_rows(controller.tracks(), state.track)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeView {
    pub value: u8,
    pub level: VolumeLevel,
    pub fill: String,
}

impl VolumeView {
    pub fn button_class(&self) -> &'static str {
        self.level.css_class()
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

pub fn volume_view(state: &PlaybackState) -> VolumeView {
    let value = state.displayed_volume();
    VolumeView {
        value,
        level: state.volume_level(),
        fill: slider_fill(value),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportView {
    pub play_icon: &'static str,
    pub time_label: String,
    pub seek_percent: f64,
    pub now_playing: Option<String>,
}

pub fn transport_view<O: AudioOutput, S: VolumeStore>(
    controller: &PlaybackController<O, S>,
) -> TransportView {
    let state = controller.state();
    TransportView {
        play_icon: play_icon(state.status),
        time_label: time_label(state.current_time, state.duration),
        seek_percent: seek_percent(state.current_time, state.duration),
        now_playing: controller.active_track().map(|t| t.name.clone()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub panel_left: &'static str,
    pub container_class: &'static str,
    /// The close affordance is shown exactly when the panel is open.
    pub close_display: &'static str,
    pub body_overflow: &'static str,
}

pub fn menu_view(open: bool) -> MenuView {
    if open {
        MenuView {
            panel_left: "0",
            container_class: "container menu-open",
            close_display: "",
            body_overflow: "hidden",
        }
    } else {
        MenuView {
            panel_left: "-320px",
            container_class: "container",
            close_display: "none",
            body_overflow: "",
        }
    }
}

/// Clicks outside the panel close it only on narrow viewports.
pub fn closes_on_outside_click(open: bool, viewport_width: Option<f64>, breakpoint: f64) -> bool {
    open && viewport_width.is_some_and(|width| width <= breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Manifest, ManifestLoader};
    use crate::db::MemoryVolumeStore;
    use crate::player::NullAudioOutput;

    type TestController = PlaybackController<NullAudioOutput, MemoryVolumeStore>;

    fn controller(manifest: Manifest) -> TestController {
        let mut controller =
            PlaybackController::new(NullAudioOutput, MemoryVolumeStore::new(), "songs", 30);
        controller.set_manifest(manifest);
        controller
    }

    fn highlighted(view: &LibraryView) -> Vec<&str> {
        match view {
            LibraryView::Tracks(rows) => rows
                .iter()
                .filter(|r| r.playing)
                .map(|r| r.name.as_str())
                .collect(),
            other => panic!("expected tracks, got {other:?}"),
        }
    }

    #[test]
    fn seek_indicator_percent() {
        assert_eq!(seek_percent(30.0, Some(120.0)), 25.0);
        assert_eq!(seek_percent(30.0, None), 0.0);
        assert_eq!(seek_percent(30.0, Some(0.0)), 0.0);
        assert_eq!(seek_percent(f64::NAN, Some(10.0)), 0.0);
    }

    #[test]
    fn menu_close_button_mirrors_panel() {
        let open = menu_view(true);
        assert_eq!(open.panel_left, "0");
        assert_eq!(open.close_display, "");
        assert!(open.container_class.contains("menu-open"));

        let closed = menu_view(false);
        assert_eq!(closed.panel_left, "-320px");
        assert_eq!(closed.close_display, "none");
        assert!(!closed.container_class.contains("menu-open"));
    }

    #[test]
    fn outside_click_only_closes_narrow_open_menu() {
        assert!(closes_on_outside_click(true, Some(600.0), 740.0));
        assert!(closes_on_outside_click(true, Some(740.0), 740.0));
        assert!(!closes_on_outside_click(true, Some(1024.0), 740.0));
        assert!(!closes_on_outside_click(false, Some(600.0), 740.0));
        assert!(!closes_on_outside_click(true, None, 740.0));
    }

    #[test]
    fn rows_keep_full_name_and_shorten_label() {
        let long = "x".repeat(40);
        let mut controller = controller(Manifest::from_folders([(
            "CAR",
            vec![format!("{long}.mp3")],
        )]));
        controller.select_folder("CAR");

        let LibraryView::Tracks(rows) = library_view(&controller) else {
            panic!("expected tracks");
        };
        assert_eq!(rows[0].name, long);
        assert_eq!(rows[0].display_name, format!("{}...", "x".repeat(30)));
    }

    #[test]
    fn volume_view_tracks_mute() {
        let mut controller = controller(Manifest::default());
        controller.set_volume(20);
        let view = volume_view(controller.state());
        assert_eq!(view.button_class(), "volume-low");
        assert_eq!(view.icon(), "./svg/volume.svg");

        controller.toggle_mute();
        let view = volume_view(controller.state());
        assert_eq!(view.value, 0);
        assert_eq!(view.button_class(), "muted");
        assert_eq!(view.icon(), "./svg/mute.svg");
        assert!(view.fill.contains(" 0%"));
    }

    #[test]
    fn two_track_folder_end_to_end() {
        let mut controller = controller(Manifest::parse(r#"{"CAR":["a.mp3","b.mp3"]}"#).unwrap());
        assert_eq!(library_view(&controller), LibraryView::Pending);

        controller.select_folder("CAR");
        let view = library_view(&controller);
        let LibraryView::Tracks(rows) = &view else {
            panic!("expected tracks");
        };
        assert_eq!(rows.len(), 2);
        assert!(highlighted(&view).is_empty());
        assert_eq!(transport_view(&controller).play_icon, PLAY_ICON);

        controller.play("a");
        assert_eq!(highlighted(&library_view(&controller)), ["a"]);
        let transport = transport_view(&controller);
        assert_eq!(transport.play_icon, PAUSE_ICON);
        assert_eq!(transport.time_label, "00:00 / 00:00");
        assert_eq!(transport.now_playing.as_deref(), Some("a"));

        controller.on_duration_change(125.0);
        controller.on_time_update(65.0);
        assert_eq!(transport_view(&controller).time_label, "01:05 / 02:05");

        controller.on_ended();
        assert_eq!(highlighted(&library_view(&controller)), ["b"]);
        assert_eq!(transport_view(&controller).play_icon, PAUSE_ICON);

        controller.on_ended();
        assert_eq!(transport_view(&controller).play_icon, PLAY_ICON);
        assert_eq!(highlighted(&library_view(&controller)), ["b"]);
    }

    #[tokio::test]
    async fn failed_manifest_shows_no_songs_placeholder() {
        let loader = ManifestLoader::new("songs/manifest.json");
        let manifest = loader
            .load_with(|_| async {
                Err(crate::api::ManifestError::Fetch("connection refused".into()))
            })
            .await;

        let mut controller = controller(manifest);
        controller.select_folder("CAR");
        let view = library_view(&controller);
        assert_eq!(
            view,
            LibraryView::NoSongs {
                folder: "CAR".to_string()
            }
        );
        assert_eq!(no_songs_hint("CAR"), "Add MP3 files to the CAR folder");
    }
}
