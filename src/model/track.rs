use crate::plist::{string_or, Dict};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// One track from the library catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track title
    pub name: String,
}

impl Track {
    pub fn new(artist: impl Into<String>, album: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            album: album.into(),
            name: name.into(),
        }
    }

    /// Build a track from its catalog dict
    ///
    /// Missing or non-string fields fall back to the "Unknown ..." placeholders.
    pub fn from_dict(dict: &Dict) -> Self {
        Self::new(
            string_or(dict, "Artist", UNKNOWN_ARTIST),
            string_or(dict, "Album", UNKNOWN_ALBUM),
            string_or(dict, "Name", UNKNOWN_NAME),
        )
    }

    /// Track with every field set to its placeholder
    pub fn placeholder() -> Self {
        Self::new(UNKNOWN_ARTIST, UNKNOWN_ALBUM, UNKNOWN_NAME)
    }
}
