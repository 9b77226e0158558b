use super::Track;

pub const UNKNOWN_PLAYLIST: &str = "Unknown Playlist";

/// A named, ordered list of resolved tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Tracks in playlist order; the same track may appear more than once
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
