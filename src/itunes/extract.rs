//! Build the track catalog and playlists from a decoded iTunes library

use crate::config::{ExtractConfig, MissingTrackPolicy};
use crate::model::{Library, Playlist, Track, UNKNOWN_PLAYLIST};
use crate::plist::{require, string_or, Dict, Value};
use anyhow::{Context, Result};

/// Extract the library from the root dict of an iTunes plist
///
/// A missing or mistyped `Tracks` or `Playlists` entry is fatal. Problems
/// confined to one playlist or one playlist item are logged and that entry
/// is skipped.
pub fn extract_library(root: &Value, config: &ExtractConfig) -> Result<Library> {
    let root = root.as_dict().context("Library root is not a dict")?;
    let mut library = Library::new();

    extract_tracks(root, &mut library)?;
    log::info!("Library contains {} tracks", library.track_count());

    let raw_playlists = require(root, "Playlists")
        .and_then(Value::as_array)
        .context("Library has no usable 'Playlists' array")?;
    log::info!("Library contains {} playlists", raw_playlists.len());

    if config.skip_builtin_playlists > 0 && raw_playlists.len() <= config.skip_builtin_playlists {
        log::warn!(
            "Only {} playlists present, all within the {} built-in playlists being skipped",
            raw_playlists.len(),
            config.skip_builtin_playlists
        );
    }

    for (index, raw) in raw_playlists
        .iter()
        .enumerate()
        .skip(config.skip_builtin_playlists)
    {
        let dict = match raw.as_dict() {
            Ok(dict) => dict,
            Err(e) => {
                log::warn!("Skipping playlist #{}: {}", index, e);
                continue;
            }
        };
        if let Some(playlist) = extract_playlist(dict, &library, config) {
            library.add_playlist(playlist);
        }
    }

    log::info!("Parsed {} playlists successfully", library.playlist_count());
    Ok(library)
}

fn extract_tracks(root: &Dict, library: &mut Library) -> Result<()> {
    let raw_tracks = require(root, "Tracks")
        .and_then(Value::as_dict)
        .context("Library has no usable 'Tracks' dict")?;

    for (id, raw) in raw_tracks {
        match raw.as_dict() {
            Ok(dict) => library.add_track(id.as_str(), Track::from_dict(dict)),
            Err(e) => log::warn!("Skipping track {}: {}", id, e),
        }
    }
    Ok(())
}

/// Resolve one playlist dict, or `None` when it has no item list
fn extract_playlist(dict: &Dict, library: &Library, config: &ExtractConfig) -> Option<Playlist> {
    let mut playlist = Playlist::new(string_or(dict, "Name", UNKNOWN_PLAYLIST));

    let items = match require(dict, "Playlist Items").and_then(Value::as_array) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Playlist '{}' has no tracks: {}", playlist.name, e);
            return None;
        }
    };

    for (index, item) in items.iter().enumerate() {
        let track_id = match item
            .as_dict()
            .and_then(|d| require(d, "Track ID"))
            .and_then(Value::as_int)
        {
            Ok(id) => id,
            Err(e) => {
                log::warn!(
                    "Playlist '{}' item #{}: bad track reference ({}), skipping",
                    playlist.name,
                    index,
                    e
                );
                continue;
            }
        };

        match library.resolve(track_id) {
            Some(track) => playlist.add_track(track.clone()),
            None => match config.missing_track {
                MissingTrackPolicy::Skip => {
                    log::warn!(
                        "Playlist '{}' item #{}: track {} not in library, skipping",
                        playlist.name,
                        index,
                        track_id
                    );
                }
                MissingTrackPolicy::Placeholder => {
                    log::warn!(
                        "Playlist '{}' item #{}: track {} not in library, using placeholder",
                        playlist.name,
                        index,
                        track_id
                    );
                    playlist.add_track(Track::placeholder());
                }
            },
        }
    }

    if playlist.is_empty() {
        log::debug!("Playlist '{}' resolved to no tracks", playlist.name);
    } else {
        log::debug!("Playlist '{}': {} tracks", playlist.name, playlist.len());
    }
    Some(playlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plist::decode_document;

    fn plist(body: &str) -> Value {
        let xml = format!("<?xml version=\"1.0\"?><plist version=\"1.0\"><dict>{body}</dict></plist>");
        decode_document(&xml).unwrap()
    }

    fn named_playlist(name: &str, items: &[i64]) -> String {
        let items: String = items
            .iter()
            .map(|id| format!("<dict><key>Track ID</key><integer>{id}</integer></dict>"))
            .collect();
        format!(
            "<dict><key>Name</key><string>{name}</string>\
             <key>Playlist Items</key><array>{items}</array></dict>"
        )
    }

    const SANDSTORM: &str = "<key>Tracks</key><dict>\
        <key>1</key><dict>\
            <key>Track ID</key><integer>1</integer>\
            <key>Name</key><string>Sandstorm</string>\
            <key>Artist</key><string>Darude</string>\
            <key>Album</key><string>Before The Storm</string>\
        </dict></dict>";

    fn builtin_playlists() -> String {
        ["Library", "Downloaded", "Music", "Podcasts", "Albums"]
            .iter()
            .map(|n| named_playlist(n, &[1]))
            .collect()
    }

    #[test]
    fn test_end_to_end_single_playlist() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array>{}{}</array>",
            builtin_playlists(),
            named_playlist("My Playlist", &[1])
        ));

        let library = extract_library(&root, &ExtractConfig::new()).unwrap();
        assert_eq!(library.track_count(), 1);
        assert_eq!(library.playlist_count(), 1);

        let playlist = &library.playlists()[0];
        assert_eq!(playlist.name, "My Playlist");
        assert_eq!(
            playlist.tracks,
            vec![Track::new("Darude", "Before The Storm", "Sandstorm")]
        );
    }

    #[test]
    fn test_skips_first_five_playlists() {
        let extra: String = (0..7).map(|i| named_playlist(&format!("P{i}"), &[1])).collect();
        let root = plist(&format!("{SANDSTORM}<key>Playlists</key><array>{extra}</array>"));

        let library = extract_library(&root, &ExtractConfig::new()).unwrap();
        let names: Vec<&str> = library.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P5", "P6"]);
    }

    #[test]
    fn test_skip_count_is_configurable() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array>{}</array>",
            named_playlist("Only", &[1])
        ));

        let config = ExtractConfig::new().with_skip_builtin(0);
        let library = extract_library(&root, &config).unwrap();
        assert_eq!(library.playlists()[0].name, "Only");

        let library = extract_library(&root, &ExtractConfig::new()).unwrap();
        assert_eq!(library.playlist_count(), 0);
    }

    #[test]
    fn test_unresolved_track_is_skipped_by_default() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array>{}</array>",
            named_playlist("Mixed", &[1, 99, 1])
        ));

        let config = ExtractConfig::new().with_skip_builtin(0);
        let library = extract_library(&root, &config).unwrap();
        let playlist = &library.playlists()[0];
        assert_eq!(playlist.len(), 2);
        assert!(playlist.tracks.iter().all(|t| t.name == "Sandstorm"));
        assert!(playlist.tracks.iter().all(|t| !t.artist.is_empty()));
    }

    #[test]
    fn test_unresolved_track_placeholder_policy() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array>{}</array>",
            named_playlist("Mixed", &[99])
        ));

        let config = ExtractConfig::new()
            .with_skip_builtin(0)
            .with_missing_track(MissingTrackPolicy::Placeholder);
        let library = extract_library(&root, &config).unwrap();
        assert_eq!(library.playlists()[0].tracks, vec![Track::placeholder()]);
    }

    #[test]
    fn test_playlist_without_items_is_skipped() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array>\
             <dict><key>Name</key><string>Empty</string></dict>\
             <dict><key>Name</key><string>Wrong</string><key>Playlist Items</key><string>x</string></dict>\
             {}</array>",
            named_playlist("Good", &[1])
        ));

        let config = ExtractConfig::new().with_skip_builtin(0);
        let library = extract_library(&root, &config).unwrap();
        assert_eq!(library.playlist_count(), 1);
        assert_eq!(library.playlists()[0].name, "Good");
    }

    #[test]
    fn test_empty_item_list_keeps_playlist() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array>{}</array>",
            named_playlist("Empty", &[])
        ));

        let config = ExtractConfig::new().with_skip_builtin(0);
        let library = extract_library(&root, &config).unwrap();
        assert_eq!(library.playlist_count(), 1);
        assert!(library.playlists()[0].is_empty());
    }

    #[test]
    fn test_item_without_integer_track_id_is_skipped() {
        let root = plist(&format!(
            "{SANDSTORM}<key>Playlists</key><array><dict>\
             <key>Playlist Items</key><array>\
                <dict><key>Track ID</key><string>1</string></dict>\
                <dict></dict>\
                <dict><key>Track ID</key><integer>1</integer></dict>\
             </array></dict></array>"
        ));

        let config = ExtractConfig::new().with_skip_builtin(0);
        let library = extract_library(&root, &config).unwrap();
        let playlist = &library.playlists()[0];
        assert_eq!(playlist.name, "Unknown Playlist");
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_missing_tracks_is_fatal() {
        let root = plist("<key>Playlists</key><array></array>");
        let err = extract_library(&root, &ExtractConfig::new()).unwrap_err();
        assert!(err.to_string().contains("'Tracks'"), "{err}");
    }

    #[test]
    fn test_mistyped_playlists_is_fatal() {
        let root = plist(&format!("{SANDSTORM}<key>Playlists</key><dict></dict>"));
        let err = extract_library(&root, &ExtractConfig::new()).unwrap_err();
        assert!(err.to_string().contains("'Playlists'"), "{err}");
    }
}
