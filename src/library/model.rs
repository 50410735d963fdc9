//! Library model types: tracks and the collections grouped from them.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Position of a track in its [`Library`](super::Library).
pub type TrackId = usize;

/// Key of an album: the album name qualified by its album artist (or track
/// artist when no album artist is tagged), so two "Greatest Hits" by
/// different artists stay apart.
///
/// The parts are joined with `::`. Colons and backslashes inside a part are
/// escaped with a backslash, so no artist/album pair can produce another
/// pair's key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(String);

fn escape_part(part: &str, out: &mut String) {
    for c in part.chars() {
        if matches!(c, ':' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl AlbumId {
    pub fn new(artist: Option<&str>, album: &str) -> Self {
        let mut key = String::with_capacity(album.len() + artist.map_or(0, |a| a.len() + 2));
        if let Some(a) = artist {
            escape_part(a, &mut key);
            key.push_str("::");
        }
        escape_part(album, &mut key);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlbumId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub track_number: Option<u32>,
    pub duration: Option<Duration>,
    /// Seconds since the unix epoch.
    pub date_added: u64,
    /// Whether the file carries a picture in its tags.
    pub has_embedded_art: bool,
}

impl Track {
    /// A track with only a path and title; everything else empty.
    pub fn new(id: TrackId, path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            title: title.into(),
            artist: None,
            album: None,
            album_artist: None,
            track_number: None,
            duration: None,
            date_added: 0,
            has_embedded_art: false,
        }
    }

    /// The id of the album this track belongs to, if it is tagged with one.
    pub fn album_id(&self) -> Option<AlbumId> {
        let album = self.album.as_deref()?;
        let artist = self.album_artist.as_deref().or(self.artist.as_deref());
        Some(AlbumId::new(artist, album))
    }

    /// The file name component of the path, with invalid UTF-8 replaced.
    pub fn filename(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub artist: Option<String>,
    /// Member tracks in library order.
    pub tracks: Vec<TrackId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub name: String,
    pub albums: Vec<AlbumId>,
    pub tracks: Vec<TrackId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlbumArtist {
    pub name: String,
    pub albums: Vec<AlbumId>,
    pub tracks: Vec<TrackId>,
}
