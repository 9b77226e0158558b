//! Library data model
//!
//! Plain owned types built from the decoded plist and consumed by the
//! output renderers.

mod library;
mod playlist;
mod track;

pub use library::Library;
pub use playlist::{Playlist, UNKNOWN_PLAYLIST};
pub use track::{Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_NAME};
