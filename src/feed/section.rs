use std::fmt;

use serde::Deserialize;

use crate::artwork::{ArtworkRef, ArtworkResolver};
use crate::library::{Album, AlbumArtist, Artist, Library};
use crate::nav::Route;

/// A suggestion section of the feed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForYouSection {
    Albums,
    Artists,
    #[serde(alias = "album_artists", alias = "albumartists")]
    AlbumArtists,
}

impl ForYouSection {
    pub const ALL: [Self; 3] = [Self::Albums, Self::Artists, Self::AlbumArtists];

    pub fn label(self) -> &'static str {
        match self {
            Self::Albums => "Suggested albums",
            Self::Artists => "Suggested artists",
            Self::AlbumArtists => "Suggested album artists",
        }
    }
}

impl fmt::Display for ForYouSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tile of a suggestion section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suggestion<'a> {
    Album(&'a Album),
    Artist(&'a Artist),
    AlbumArtist(&'a AlbumArtist),
}

impl Suggestion<'_> {
    pub fn name(&self) -> &str {
        match self {
            Self::Album(a) => &a.name,
            Self::Artist(a) => &a.name,
            Self::AlbumArtist(a) => &a.name,
        }
    }

    /// Where tapping the tile leads.
    pub fn route(&self) -> Route {
        match self {
            Self::Album(a) => Route::Album(a.id.clone()),
            Self::Artist(a) => Route::Artist(a.name.clone()),
            Self::AlbumArtist(a) => Route::AlbumArtist(a.name.clone()),
        }
    }

    pub fn artwork(&self, library: &Library, resolver: &dyn ArtworkResolver) -> ArtworkRef {
        match self {
            Self::Album(a) => resolver.album(library, a),
            Self::Artist(a) => resolver.artist(library, a),
            Self::AlbumArtist(a) => resolver.album_artist(library, a),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub kind: ForYouSection,
    pub items: Vec<Suggestion<'a>>,
}

impl<'a> Section<'a> {
    pub fn rows(&self, columns: usize) -> Vec<&[Suggestion<'a>]> {
        grid_rows(&self.items, columns)
    }
}

/// Split `items` into rows of `columns`. The last row may be short; a
/// `columns` of zero is treated as one.
pub fn grid_rows<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    items.chunks(columns.max(1)).collect()
}
