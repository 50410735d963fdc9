//! Artwork seam: turn library entities into loadable image references.
//!
//! Only locators are produced here. Decoding and caching images is the
//! caller's business.

use std::path::{Path, PathBuf};

use crate::config::ArtworkSettings;
use crate::library::{Album, AlbumArtist, Artist, Library, Track, TrackId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkRef {
    /// An image file on disk.
    File(PathBuf),
    /// A picture embedded in the tags of this audio file.
    Embedded(PathBuf),
    /// Nothing found; show the default image.
    Placeholder,
}

impl ArtworkRef {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

pub trait ArtworkResolver {
    fn track(&self, track: &Track) -> ArtworkRef;

    /// First non-placeholder artwork among `tracks`.
    fn first_of(&self, library: &Library, tracks: &[TrackId]) -> ArtworkRef {
        library
            .resolve(tracks)
            .into_iter()
            .map(|t| self.track(t))
            .find(|a| !a.is_placeholder())
            .unwrap_or(ArtworkRef::Placeholder)
    }

    fn album(&self, library: &Library, album: &Album) -> ArtworkRef {
        self.first_of(library, &album.tracks)
    }

    fn artist(&self, library: &Library, artist: &Artist) -> ArtworkRef {
        self.first_of(library, &artist.tracks)
    }

    fn album_artist(&self, library: &Library, album_artist: &AlbumArtist) -> ArtworkRef {
        self.first_of(library, &album_artist.tracks)
    }
}

/// Looks for cover images next to the audio file, then embedded pictures.
#[derive(Debug, Clone)]
pub struct FolderArtwork {
    file_names: Vec<String>,
}

impl FolderArtwork {
    pub fn new(settings: &ArtworkSettings) -> Self {
        Self {
            file_names: settings.file_names.clone(),
        }
    }

    fn cover_in(&self, dir: &Path) -> Option<PathBuf> {
        self.file_names
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    }
}

impl ArtworkResolver for FolderArtwork {
    fn track(&self, track: &Track) -> ArtworkRef {
        if let Some(cover) = track.path.parent().and_then(|d| self.cover_in(d)) {
            return ArtworkRef::File(cover);
        }
        if track.has_embedded_art {
            return ArtworkRef::Embedded(track.path.clone());
        }
        ArtworkRef::Placeholder
    }
}
