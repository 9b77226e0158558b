//! Run configuration
//!
//! Built once from the command line and passed by reference to the
//! stages that need it.

use crate::output::OutputFormat;
use std::path::PathBuf;

/// Number of built-in playlists an iTunes export lists before the user's own
/// ("Library", "Downloaded", "Music", "Podcasts", "Albums")
pub const BUILTIN_PLAYLIST_COUNT: usize = 5;

/// What to do with a playlist item whose Track ID is not in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTrackPolicy {
    /// Leave the item out of the playlist
    #[default]
    Skip,

    /// Keep the slot, filled with the "Unknown ..." placeholder track
    Placeholder,
}

/// Configuration for library extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Leading entries of the Playlists array to ignore
    pub skip_builtin_playlists: usize,

    /// Handling of unresolved track references
    pub missing_track: MissingTrackPolicy,
}

impl ExtractConfig {
    /// Create the default extraction configuration
    pub fn new() -> Self {
        Self {
            skip_builtin_playlists: BUILTIN_PLAYLIST_COUNT,
            missing_track: MissingTrackPolicy::Skip,
        }
    }

    /// Set how many leading playlists to skip
    pub fn with_skip_builtin(mut self, count: usize) -> Self {
        self.skip_builtin_playlists = count;
        self
    }

    /// Set unresolved track handling
    pub fn with_missing_track(mut self, policy: MissingTrackPolicy) -> Self {
        self.missing_track = policy;
        self
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for one complete run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// iTunes library XML export to read
    pub input: PathBuf,

    /// File the rendered playlists are written to
    pub output: PathBuf,

    /// Rendering format
    pub format: OutputFormat,

    /// Extraction settings
    pub extract: ExtractConfig,
}

impl RunConfig {
    /// Create a run configuration with default extraction settings
    pub fn new(input: PathBuf, output: PathBuf, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
            extract: ExtractConfig::new(),
        }
    }

    /// Set extraction settings
    pub fn with_extract(mut self, extract: ExtractConfig) -> Self {
        self.extract = extract;
        self
    }
}
