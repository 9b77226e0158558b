use anyhow::Result;
use clap::Parser;
use itunes_playlists::{ExtractConfig, MissingTrackPolicy, OutputFormat, RunConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itunes-playlists")]
#[command(about = "List the playlists of an iTunes library XML export", long_about = None)]
struct Args {
    /// The path to the iTunes library XML export file
    #[arg(short = 'p', long)]
    path: String,

    /// The path to the output playlist file
    #[arg(short = 'o', long, default_value = "playlists.txt")]
    out: String,

    /// Print debug messages
    #[arg(short = 'd', long)]
    debug: bool,

    /// The output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Number of leading built-in playlists to ignore
    #[arg(long, default_value_t = itunes_playlists::config::BUILTIN_PLAYLIST_COUNT)]
    skip_builtin: usize,

    /// Keep references to tracks missing from the library as "Unknown" rows
    #[arg(long)]
    keep_missing: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let missing_track = if self.keep_missing {
            MissingTrackPolicy::Placeholder
        } else {
            MissingTrackPolicy::Skip
        };
        let extract = ExtractConfig::new()
            .with_skip_builtin(self.skip_builtin)
            .with_missing_track(missing_track);

        // Expand ~ in paths
        let input = PathBuf::from(shellexpand::tilde(&self.path).as_ref());
        let output = PathBuf::from(shellexpand::tilde(&self.out).as_ref());

        RunConfig::new(input, output, self.format).with_extract(extract)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stdout)
        .init();

    let config = args.into_config();
    log::debug!("Run configuration: {:?}", config);

    itunes_playlists::run(&config)
}
