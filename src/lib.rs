//! iTunes Playlists - iTunes library playlist exporter
//!
//! This library reads the XML export of an iTunes library and lists each
//! user playlist's tracks as CSV or as a text table.

pub mod config;
pub mod itunes;
pub mod model;
pub mod output;
pub mod plist;

pub use config::{ExtractConfig, MissingTrackPolicy, RunConfig};
pub use output::OutputFormat;

use anyhow::Result;

/// Parse the input library and write its playlists, as configured
pub fn run(config: &RunConfig) -> Result<()> {
    let library = itunes::parse_library(&config.input, &config.extract)?;
    output::write_to_path(library.playlists(), &config.output, config.format)
}
