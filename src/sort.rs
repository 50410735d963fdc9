//! Track ordering for the feed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::library::Track;

/// Key used to order songs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SongSortBy {
    #[default]
    Title,
    Artist,
    Album,
    #[serde(alias = "album_artist")]
    AlbumArtist,
    Duration,
    #[serde(alias = "date_added")]
    DateAdded,
    #[serde(alias = "track_number")]
    TrackNumber,
    Filename,
}

impl SongSortBy {
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Artist,
        Self::Album,
        Self::AlbumArtist,
        Self::Duration,
        Self::DateAdded,
        Self::TrackNumber,
        Self::Filename,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::AlbumArtist => "album-artist",
            Self::Duration => "duration",
            Self::DateAdded => "date-added",
            Self::TrackNumber => "track-number",
            Self::Filename => "filename",
        }
    }
}

impl fmt::Display for SongSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SongSortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown sort key {s:?} (expected one of {})", known.join(", "))
            })
    }
}

/// A sort key plus whether the result is reversed. This is what the settings
/// store remembers as the "last used" song sort.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SongSort {
    pub by: SongSortBy,
    pub reversed: bool,
}

impl SongSort {
    pub fn new(by: SongSortBy, reversed: bool) -> Self {
        Self { by, reversed }
    }

    pub fn apply<'a, I>(self, tracks: I) -> Vec<&'a Track>
    where
        I: IntoIterator<Item = &'a Track>,
    {
        sort_tracks(tracks, self.by, self.reversed)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(Option<String>),
    Number(Option<u64>),
}

/// Case-insensitive text key that ignores leading punctuation, so
/// "(What's the Story)" files under "w".
fn text_key(input: &str) -> String {
    input
        .to_lowercase()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_owned()
}

fn sort_key(track: &Track, by: SongSortBy) -> SortKey {
    let text = |v: Option<&str>| SortKey::Text(v.map(text_key));
    match by {
        SongSortBy::Title => text(Some(track.title.as_str())),
        SongSortBy::Artist => text(track.artist.as_deref()),
        SongSortBy::Album => text(track.album.as_deref()),
        SongSortBy::AlbumArtist => text(track.album_artist.as_deref()),
        SongSortBy::Filename => SortKey::Text(Some(text_key(&track.filename()))),
        SongSortBy::Duration => SortKey::Number(
            track
                .duration
                .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        ),
        SongSortBy::DateAdded => SortKey::Number(Some(track.date_added)),
        SongSortBy::TrackNumber => SortKey::Number(track.track_number.map(u64::from)),
    }
}

/// Order `tracks` by `by`, reversing the whole result when `reversed` is set.
///
/// Every input track appears exactly once. Tracks with equal keys keep their
/// input order before the optional reversal; missing values sort first.
pub fn sort_tracks<'a, I>(tracks: I, by: SongSortBy, reversed: bool) -> Vec<&'a Track>
where
    I: IntoIterator<Item = &'a Track>,
{
    let mut sorted: Vec<&'a Track> = tracks.into_iter().collect();
    // stable
    sorted.sort_by_cached_key(|t| sort_key(t, by));
    if reversed {
        sorted.reverse();
    }
    sorted
}
