use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use lofty::prelude::*;
use log::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Configured extensions, lowercased and without leading dots.
fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// When the file entered the library: creation time where the filesystem
/// records one, modification time otherwise.
fn date_added(path: &Path) -> u64 {
    let Ok(meta) = fs::metadata(path) else {
        return 0;
    };
    meta.created()
        .or_else(|_| meta.modified())
        .ok()
        .and_then(|t: SystemTime| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn non_empty(v: impl AsRef<str>) -> Option<String> {
    let v = v.as_ref().trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Read tags into `track`. Files without readable tags keep the defaults.
fn read_tags(path: &Path, track: &mut Track) {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            debug!("no tags for {}: {e}", path.display());
            return;
        }
    };

    let duration: Duration = tagged.properties().duration();
    if !duration.is_zero() {
        track.duration = Some(duration);
    }

    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return;
    };

    if let Some(v) = tag.title().and_then(non_empty) {
        track.title = v;
    }
    track.artist = tag.artist().and_then(non_empty);
    track.album = tag.album().and_then(non_empty);
    track.track_number = tag.track();
    track.album_artist = tag
        .items()
        .find(|item| matches!(item.key(), ItemKey::AlbumArtist))
        .and_then(|item| item.value().text())
        .and_then(non_empty);
    track.has_embedded_art = !tag.pictures().is_empty();
}

/// Walk `dir` and load every audio file the settings accept, ordered by path.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();
    let exts = normalize_extensions(&settings.extensions);

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| match e {
            Ok(e) => Some(e),
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                None
            }
        })
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, &exts) {
            continue;
        }

        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        let mut track = Track::new(0, path, title);
        track.date_added = date_added(path);
        read_tags(path, &mut track);
        tracks.push(track);
    }

    tracks.sort_by(|a, b| a.path.cmp(&b.path));
    for (i, t) in tracks.iter_mut().enumerate() {
        t.id = i;
    }

    debug!("scanned {} tracks under {}", tracks.len(), dir.display());
    tracks
}
