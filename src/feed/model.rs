use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::FeedSettings;
use crate::error::{Error, Result};
use crate::library::{AlbumId, Library, Track, TrackId};
use crate::nav::{Navigator, Route};
use crate::pick::{random_sub_list, sub_list_non_strict};
use crate::player::{PlayOptions, Radio};
use crate::sort::{SongSort, SongSortBy, sort_tracks};

use super::section::{ForYouSection, Section, Suggestion};

/// Something the user can do from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// Play the whole library in the last used sort order.
    PlayAll,
    /// Play the whole library shuffled.
    ShufflePlay,
    /// Play the recently added list, starting at this carousel tile.
    PlayRecent(usize),
    OpenAlbum(AlbumId),
    OpenArtist(String),
    OpenAlbumArtist(String),
}

impl From<Route> for FeedAction {
    fn from(route: Route) -> Self {
        match route {
            Route::Album(id) => Self::OpenAlbum(id),
            Route::Artist(name) => Self::OpenArtist(name),
            Route::AlbumArtist(name) => Self::OpenAlbumArtist(name),
        }
    }
}

/// Random picks, as positions into the library's collections.
#[derive(Debug, Default)]
struct Picks {
    albums: Vec<usize>,
    artists: Vec<usize>,
    album_artists: Vec<usize>,
}

/// Memoized state behind the feed.
///
/// Sorted lists are recomputed when the library or the sort changes. Random
/// suggestions are recomputed when the library or the suggestion count
/// changes, so pulling the feed twice shows the same suggestions.
pub struct ForYou {
    rng: StdRng,
    library_revision: Option<u64>,
    sort: Option<SongSort>,
    suggestion_count: Option<usize>,
    sorted: Vec<TrackId>,
    recently_added: Vec<TrackId>,
    picks: Picks,
}

impl Default for ForYou {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl ForYou {
    pub fn new() -> Self {
        Self::default()
    }

    /// A feed whose suggestions are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            library_revision: None,
            sort: None,
            suggestion_count: None,
            sorted: Vec::new(),
            recently_added: Vec::new(),
            picks: Picks::default(),
        }
    }

    /// Draw new suggestions on the next pull.
    pub fn refresh_suggestions(&mut self) {
        self.suggestion_count = None;
    }

    /// Pull the feed for `library`, recomputing only what changed.
    pub fn feed<'a>(
        &mut self,
        library: &'a Library,
        sort: SongSort,
        settings: &FeedSettings,
    ) -> Feed<'a> {
        if library.is_empty() {
            return Feed::Empty;
        }
        self.sync(library, sort, settings.suggestion_count);

        let sections = settings
            .enabled_sections()
            .into_iter()
            .map(|kind| Section {
                kind,
                items: self.suggestions(library, kind),
            })
            .filter(|s| !s.items.is_empty())
            .collect();

        Feed::Populated(FeedContent {
            library,
            sorted: library.resolve(&self.sorted),
            recently_added: library.resolve(&self.recently_added),
            carousel_len: settings.recently_added_count,
            sections,
            grid_columns: settings.grid_columns,
        })
    }

    fn sync(&mut self, library: &Library, sort: SongSort, suggestion_count: usize) {
        let library_changed = self.library_revision != Some(library.revision());

        if library_changed || self.sort != Some(sort) {
            debug!("sorting {} tracks by {}", library.tracks().len(), sort.by);
            self.sorted = track_ids(&sort.apply(library.tracks()));
            self.sort = Some(sort);
        }

        if library_changed {
            self.recently_added =
                track_ids(&sort_tracks(library.tracks(), SongSortBy::DateAdded, true));
        }

        if library_changed || self.suggestion_count != Some(suggestion_count) {
            debug!("picking {suggestion_count} suggestions per section");
            self.picks = Picks {
                albums: self.pick(library.albums().len(), suggestion_count),
                artists: self.pick(library.artists().len(), suggestion_count),
                album_artists: self.pick(library.album_artists().len(), suggestion_count),
            };
            self.suggestion_count = Some(suggestion_count);
        }

        self.library_revision = Some(library.revision());
    }

    fn pick(&mut self, len: usize, count: usize) -> Vec<usize> {
        let positions: Vec<usize> = (0..len).collect();
        random_sub_list(&positions, count, &mut self.rng)
    }

    fn suggestions<'a>(&self, library: &'a Library, kind: ForYouSection) -> Vec<Suggestion<'a>> {
        match kind {
            ForYouSection::Albums => self
                .picks
                .albums
                .iter()
                .filter_map(|&i| library.albums().get(i).map(Suggestion::Album))
                .collect(),
            ForYouSection::Artists => self
                .picks
                .artists
                .iter()
                .filter_map(|&i| library.artists().get(i).map(Suggestion::Artist))
                .collect(),
            ForYouSection::AlbumArtists => self
                .picks
                .album_artists
                .iter()
                .filter_map(|&i| library.album_artists().get(i).map(Suggestion::AlbumArtist))
                .collect(),
        }
    }
}

/// A snapshot of the feed.
#[derive(Debug)]
pub enum Feed<'a> {
    /// The library has no tracks.
    Empty,
    Populated(FeedContent<'a>),
}

impl<'a> Feed<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn content(&self) -> Option<&FeedContent<'a>> {
        match self {
            Self::Empty => None,
            Self::Populated(c) => Some(c),
        }
    }

    /// Carry out `action` against this snapshot.
    pub fn dispatch(
        &self,
        action: &FeedAction,
        radio: &mut dyn Radio,
        navigator: &mut dyn Navigator,
    ) -> Result<()> {
        match self {
            Self::Empty => Err(Error::EmptyLibrary),
            Self::Populated(c) => c.dispatch(action, radio, navigator),
        }
    }
}

#[derive(Debug)]
pub struct FeedContent<'a> {
    library: &'a Library,
    /// Every track, in the last used sort order.
    pub sorted: Vec<&'a Track>,
    /// Every track, newest first.
    pub recently_added: Vec<&'a Track>,
    carousel_len: usize,
    pub sections: Vec<Section<'a>>,
    grid_columns: usize,
}

impl<'a> FeedContent<'a> {
    pub fn library(&self) -> &'a Library {
        self.library
    }

    /// The recently added tiles.
    pub fn carousel(&self) -> &[&'a Track] {
        sub_list_non_strict(&self.recently_added, self.carousel_len)
    }

    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    fn dispatch(
        &self,
        action: &FeedAction,
        radio: &mut dyn Radio,
        navigator: &mut dyn Navigator,
    ) -> Result<()> {
        info!("feed action: {action:?}");
        match action {
            FeedAction::PlayAll => {
                radio.play_queue(track_ids(&self.sorted), PlayOptions::default())
            }
            FeedAction::ShufflePlay => radio.play_queue(
                self.library.tracks().iter().map(|t| t.id).collect(),
                PlayOptions::shuffled(),
            ),
            FeedAction::PlayRecent(index) => {
                let len = self.carousel().len();
                if *index >= len {
                    return Err(Error::IndexOutOfRange { index: *index, len });
                }
                radio.play_queue(track_ids(&self.recently_added), PlayOptions::at(*index))
            }
            FeedAction::OpenAlbum(id) => {
                if self.library.album(id).is_none() {
                    return Err(Error::UnknownAlbum(id.clone()));
                }
                navigator.navigate(Route::Album(id.clone()));
                Ok(())
            }
            FeedAction::OpenArtist(name) => {
                if self.library.artist(name).is_none() {
                    return Err(Error::UnknownArtist(name.clone()));
                }
                navigator.navigate(Route::Artist(name.clone()));
                Ok(())
            }
            FeedAction::OpenAlbumArtist(name) => {
                if self.library.album_artist(name).is_none() {
                    return Err(Error::UnknownAlbumArtist(name.clone()));
                }
                navigator.navigate(Route::AlbumArtist(name.clone()));
                Ok(())
            }
        }
    }
}

fn track_ids(tracks: &[&Track]) -> Vec<TrackId> {
    tracks.iter().map(|t| t.id).collect()
}
