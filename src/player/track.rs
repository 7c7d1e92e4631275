//! Tracks of the active folder.

const TRACK_EXTENSION: &str = ".mp3";
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// URL handed to the audio element.
    pub path: String,
    /// Filename without directory or extension. Used for matching.
    pub name: String,
    /// Name shown in the list, shortened when long.
    pub display_name: String,
}

impl Track {
    pub fn new(songs_root: &str, folder: &str, file: &str, display_limit: usize) -> Self {
        let path = format!("{songs_root}/{folder}/{file}");
        let name = track_name(&path).to_string();
        let display_name = truncate_display_name(&name, display_limit);
        Self {
            path,
            name,
            display_name,
        }
    }
}

/// Last path segment with a trailing `.mp3` removed.
pub fn track_name(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.strip_suffix(TRACK_EXTENSION).unwrap_or(file)
}

pub fn truncate_display_name(name: &str, limit: usize) -> String {
    match name.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &name[..cut]),
        None => name.to_string(),
    }
}

/// Ordered tracks derived from one manifest folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackList {
    folder: String,
    tracks: Vec<Track>,
}

impl TrackList {
    pub fn build(songs_root: &str, folder: &str, files: &[String], display_limit: usize) -> Self {
        Self {
            folder: folder.to_string(),
            tracks: files
                .iter()
                .map(|file| Track::new(songs_root, folder, file, display_limit))
                .collect(),
        }
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Case-sensitive lookup on the extension-stripped name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn builds_paths_in_manifest_order() {
        let list = TrackList::build("songs", "CAR", &files(&["b.mp3", "a.mp3"]), 30);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().path, "songs/CAR/b.mp3");
        assert_eq!(list.get(1).unwrap().name, "a");
        assert_eq!(list.folder(), "CAR");
    }

    #[test]
    fn name_strips_only_trailing_extension() {
        assert_eq!(track_name("songs/CAR/Intro.mp3"), "Intro");
        assert_eq!(track_name("songs/CAR/live.mp3.mp3"), "live.mp3");
        assert_eq!(track_name("songs/CAR/notes.txt"), "notes.txt");
        assert_eq!(track_name("bare.mp3"), "bare");
    }

    #[test]
    fn long_names_are_shortened_for_display() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        let track = Track::new("songs", "CAR", &format!("{long}.mp3"), 30);
        assert_eq!(track.name, long);
        assert_eq!(track.display_name, "abcdefghijklmnopqrstuvwxyz0123...");

        let exact = "a".repeat(30);
        assert_eq!(truncate_display_name(&exact, 30), exact);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = "é".repeat(31);
        let shown = truncate_display_name(&name, 30);
        assert_eq!(shown.chars().count(), 33);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn position_is_exact_and_case_sensitive() {
        let list = TrackList::build("songs", "CAR", &files(&["Song.mp3", "other.mp3"]), 30);
        assert_eq!(list.position("Song"), Some(0));
        assert_eq!(list.position("song"), None);
        assert_eq!(list.position("Song.mp3"), None);
        assert_eq!(list.position("other"), Some(1));
    }
}
