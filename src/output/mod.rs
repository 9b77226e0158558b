//! Playlist renderers

mod csv;
mod table;

pub use self::csv::write_csv;
pub use self::table::write_table;

use crate::model::Playlist;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column headers shared by both renderers
pub(crate) const HEADERS: [&str; 4] = ["Playlist Name", "Artist", "Album", "Track"];

/// Output rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated, one line per track
    Csv,

    /// Fixed-width text table
    #[default]
    Table,
}

impl OutputFormat {
    /// Render playlists in this format
    pub fn write<W: Write>(&self, playlists: &[Playlist], writer: W) -> std::io::Result<()> {
        match self {
            OutputFormat::Csv => write_csv(playlists, writer),
            OutputFormat::Table => write_table(playlists, writer),
        }
    }
}

/// Render playlists into a newly created (or truncated) file
pub fn write_to_path(playlists: &[Playlist], path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;

    let mut writer = BufWriter::new(file);
    format
        .write(playlists, &mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write playlist {:?} to file {:?}", format, path))?;

    log::info!("Successfully wrote playlists to {:?}", path);
    Ok(())
}
