use serde::Deserialize;

use crate::feed::ForYouSection;
use crate::sort::{SongSort, SongSortBy};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/foryou/config.toml` or `~/.config/foryou/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `FORYOU__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub songs: SongsSettings,
    pub feed: FeedSettings,
    pub artwork: ArtworkSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "ogg".into(),
                "opus".into(),
                "m4a".into(),
            ],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

/// Song list preferences. `sort_by`/`sort_reverse` are only the starting
/// point; a saved sort state takes precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SongsSettings {
    pub sort_by: SongSortBy,
    pub sort_reverse: bool,
}

impl SongsSettings {
    pub fn sort(&self) -> SongSort {
        SongSort::new(self.sort_by, self.sort_reverse)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Suggestion sections to show, in order.
    ///
    /// Example: ["album-artists", "albums"]
    pub sections: Vec<ForYouSection>,
    /// How many random picks each suggestion section holds.
    pub suggestion_count: usize,
    /// How many tracks the "recently added" carousel shows.
    pub recently_added_count: usize,
    /// Columns of the suggestion grid.
    pub grid_columns: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            sections: ForYouSection::ALL.to_vec(),
            suggestion_count: 6,
            recently_added_count: 5,
            grid_columns: 3,
        }
    }
}

impl FeedSettings {
    /// Configured sections in order, each listed once.
    pub fn enabled_sections(&self) -> Vec<ForYouSection> {
        let mut out: Vec<ForYouSection> = Vec::with_capacity(self.sections.len());
        for s in &self.sections {
            if !out.contains(s) {
                out.push(*s);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtworkSettings {
    /// Image files looked up next to a track, first match wins.
    pub file_names: Vec<String>,
}

impl Default for ArtworkSettings {
    fn default() -> Self {
        Self {
            file_names: vec![
                "cover.jpg".into(),
                "cover.png".into(),
                "folder.jpg".into(),
                "folder.png".into(),
            ],
        }
    }
}
