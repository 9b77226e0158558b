//! Fixed-width table rendering
//!
//! Each column is as wide as its widest cell (header included) plus one
//! space of padding on either side. A divider row closes the header and
//! every playlist's block of rows.

use super::HEADERS;
use crate::model::Playlist;
use std::io::{self, Write};

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Column widths including the two padding spaces
fn column_widths(playlists: &[Playlist]) -> [usize; 4] {
    let mut widths = HEADERS.map(width);

    for playlist in playlists {
        widths[0] = widths[0].max(width(&playlist.name));
        for track in &playlist.tracks {
            widths[1] = widths[1].max(width(&track.artist));
            widths[2] = widths[2].max(width(&track.album));
            widths[3] = widths[3].max(width(&track.name));
        }
    }
    widths.map(|w| w + 2)
}

fn write_divider<W: Write>(w: &mut W, widths: &[usize; 4]) -> io::Result<()> {
    for &cw in widths {
        write!(w, "+{}", "-".repeat(cw))?;
    }
    writeln!(w, "+")
}

fn write_row<W: Write>(w: &mut W, widths: &[usize; 4], cells: [&str; 4]) -> io::Result<()> {
    for (cell, &cw) in cells.iter().zip(widths) {
        write!(w, "| {:<pad$} ", cell, pad = cw - 2)?;
    }
    writeln!(w, "|")
}

/// Write playlists as a padded text table
pub fn write_table<W: Write>(playlists: &[Playlist], mut w: W) -> io::Result<()> {
    let widths = column_widths(playlists);

    write_divider(&mut w, &widths)?;
    write_row(&mut w, &widths, HEADERS)?;
    write_divider(&mut w, &widths)?;

    for playlist in playlists {
        for track in &playlist.tracks {
            write_row(
                &mut w,
                &widths,
                [
                    playlist.name.as_str(),
                    track.artist.as_str(),
                    track.album.as_str(),
                    track.name.as_str(),
                ],
            )?;
        }
        write_divider(&mut w, &widths)?;
    }
    Ok(())
}
