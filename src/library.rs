//! The music library: track model, directory scanning and grouping.

mod index;
mod model;
mod scan;

pub use index::Library;
pub use model::{Album, AlbumArtist, AlbumId, Artist, Track, TrackId};
pub use scan::scan;
