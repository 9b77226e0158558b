//! CSV rendering
//!
//! Fields are joined with commas as-is; values containing commas are not
//! quoted.

use super::HEADERS;
use crate::model::Playlist;
use std::io::{self, Write};

/// Write a header row, then one `playlist,artist,album,track` line per track
pub fn write_csv<W: Write>(playlists: &[Playlist], mut w: W) -> io::Result<()> {
    writeln!(w, "{}", HEADERS.join(", "))?;

    for playlist in playlists {
        for track in &playlist.tracks {
            writeln!(
                w,
                "{},{},{},{}",
                playlist.name, track.artist, track.album, track.name
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;

    #[test]
    fn test_csv_output() {
        let mut playlist = Playlist::new("My Playlist");
        playlist.add_track(Track::new("Darude", "Before The Storm", "Sandstorm"));

        let mut out = Vec::new();
        write_csv(&[playlist], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Playlist Name, Artist, Album, Track\nMy Playlist,Darude,Before The Storm,Sandstorm\n"
        );
    }

    #[test]
    fn test_csv_empty() {
        let mut out = Vec::new();
        write_csv(&[Playlist::new("Nothing")], &mut out).unwrap();
        assert_eq!(out, b"Playlist Name, Artist, Album, Track\n");
    }
}
