use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use super::model::{Album, AlbumArtist, AlbumId, Artist, Track, TrackId};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Loaded tracks plus the albums, artists and album artists grouped from them.
///
/// Every `Library` gets a fresh revision number, so derived state can tell a
/// replaced library apart from the one it was computed from.
#[derive(Debug)]
pub struct Library {
    tracks: Vec<Track>,
    albums: Vec<Album>,
    artists: Vec<Artist>,
    album_artists: Vec<AlbumArtist>,
    revision: u64,
}

impl Default for Library {
    fn default() -> Self {
        Self::from_tracks(Vec::new())
    }
}

impl Library {
    /// Build a library from `tracks`. Track ids are reassigned to match their
    /// position so that `library.track(t.id)` always finds `t`.
    pub fn from_tracks(mut tracks: Vec<Track>) -> Self {
        for (i, t) in tracks.iter_mut().enumerate() {
            t.id = i;
        }

        let mut albums: Vec<Album> = Vec::new();
        let mut artists: Vec<Artist> = Vec::new();
        let mut album_artists: Vec<AlbumArtist> = Vec::new();

        let mut album_pos: HashMap<AlbumId, usize> = HashMap::new();
        let mut artist_pos: HashMap<String, usize> = HashMap::new();
        let mut album_artist_pos: HashMap<String, usize> = HashMap::new();

        for t in &tracks {
            let album_id = t.album_id();

            if let (Some(id), Some(name)) = (&album_id, &t.album) {
                let p = *album_pos.entry(id.clone()).or_insert_with(|| {
                    albums.push(Album {
                        id: id.clone(),
                        name: name.clone(),
                        artist: t.album_artist.clone().or_else(|| t.artist.clone()),
                        tracks: Vec::new(),
                    });
                    albums.len() - 1
                });
                albums[p].tracks.push(t.id);
            }

            if let Some(name) = &t.artist {
                let p = *artist_pos.entry(name.clone()).or_insert_with(|| {
                    artists.push(Artist {
                        name: name.clone(),
                        albums: Vec::new(),
                        tracks: Vec::new(),
                    });
                    artists.len() - 1
                });
                let a = &mut artists[p];
                push_member(&mut a.tracks, &mut a.albums, t.id, &album_id);
            }

            if let Some(name) = &t.album_artist {
                let p = *album_artist_pos.entry(name.clone()).or_insert_with(|| {
                    album_artists.push(AlbumArtist {
                        name: name.clone(),
                        albums: Vec::new(),
                        tracks: Vec::new(),
                    });
                    album_artists.len() - 1
                });
                let a = &mut album_artists[p];
                push_member(&mut a.tracks, &mut a.albums, t.id, &album_id);
            }
        }

        let revision = NEXT_REVISION.fetch_add(1, Ordering::Relaxed);
        debug!(
            "library r{revision}: {} tracks, {} albums, {} artists, {} album artists",
            tracks.len(),
            albums.len(),
            artists.len(),
            album_artists.len()
        );

        Self {
            tracks,
            albums,
            artists,
            album_artists,
            revision,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn album_artists(&self) -> &[AlbumArtist] {
        &self.album_artists
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| &a.id == id)
    }

    pub fn artist(&self, name: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.name == name)
    }

    pub fn album_artist(&self, name: &str) -> Option<&AlbumArtist> {
        self.album_artists.iter().find(|a| a.name == name)
    }

    /// Resolve track ids, skipping any that are not part of this library.
    pub fn resolve(&self, ids: &[TrackId]) -> Vec<&Track> {
        ids.iter().filter_map(|&id| self.track(id)).collect()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn push_member(
    tracks: &mut Vec<TrackId>,
    albums: &mut Vec<AlbumId>,
    track: TrackId,
    album: &Option<AlbumId>,
) {
    tracks.push(track);
    if let Some(id) = album {
        if !albums.contains(id) {
            albums.push(id.clone());
        }
    }
}
