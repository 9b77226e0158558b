use super::{Playlist, Track};
use std::collections::HashMap;

/// Extracted iTunes library: the track catalog and the user playlists
///
/// The catalog is keyed the way the export keys its `Tracks` dict, by the
/// decimal string form of each track ID.
#[derive(Debug, Clone, Default)]
pub struct Library {
    catalog: HashMap<String, Track>,
    playlists: Vec<Playlist>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog a track under its `Tracks` key, replacing any earlier entry
    pub fn add_track(&mut self, key: impl Into<String>, track: Track) {
        self.catalog.insert(key.into(), track);
    }

    /// Append a playlist after those already extracted
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Resolve a playlist item's integer `Track ID` against the catalog
    pub fn resolve(&self, track_id: i64) -> Option<&Track> {
        self.catalog.get(&track_id.to_string())
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn track_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_library() {
        let lib = Library::new();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
        assert!(lib.resolve(1).is_none());
    }

    #[test]
    fn test_resolve_by_integer_id() {
        let mut lib = Library::new();
        lib.add_track("1", Track::new("Darude", "Before The Storm", "Sandstorm"));
        lib.add_track("-3", Track::placeholder());

        assert_eq!(lib.track_count(), 2);
        assert_eq!(lib.resolve(1).unwrap().name, "Sandstorm");
        assert_eq!(lib.resolve(-3), Some(&Track::placeholder()));
        assert!(lib.resolve(2).is_none());
    }

    #[test]
    fn test_later_track_replaces_earlier() {
        let mut lib = Library::new();
        lib.add_track("7", Track::placeholder());
        lib.add_track("7", Track::new("Air", "Moon Safari", "Kelly Watch the Stars"));

        assert_eq!(lib.track_count(), 1);
        assert_eq!(lib.resolve(7).unwrap().artist, "Air");
    }

    #[test]
    fn test_playlists_keep_order() {
        let mut lib = Library::new();
        lib.add_playlist(Playlist::new("First"));
        lib.add_playlist(Playlist::new("Second"));

        let names: Vec<&str> = lib.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
