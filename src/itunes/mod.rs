//! iTunes library parsing
//!
//! Decodes the iTunes "Library.xml" plist export and extracts the track
//! catalog and user playlists from it.

mod extract;

pub use extract::extract_library;

use crate::config::ExtractConfig;
use crate::model::Library;
use crate::plist;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a complete iTunes library from its XML export
///
/// # Arguments
/// * `path` - Path to the exported library XML
/// * `config` - Extraction settings
pub fn parse_library(path: &Path, config: &ExtractConfig) -> Result<Library> {
    log::info!("Parsing iTunes library from {:?}", path);
    let root = plist::decode_document_from_path(path)
        .with_context(|| format!("Failed to parse iTunes library file: {:?}", path))?;

    extract_library(&root, config)
}
