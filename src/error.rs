use thiserror::Error;

use crate::library::AlbumId;

/// Errors produced by the feed, its collaborators and the settings store.
///
/// The pure list helpers in [`crate::pick`] and [`crate::sort`] never fail;
/// everything here comes from I/O, configuration or an action that does not
/// match the feed it was dispatched against.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration sources could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    /// The configuration was read but holds values the feed cannot use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("state file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse state file: {0}")]
    StateParse(#[from] toml::de::Error),

    #[error("failed to serialize state file: {0}")]
    StateWrite(#[from] toml::ser::Error),

    /// The playback side of a channel radio has gone away.
    #[error("player is not running")]
    PlayerDisconnected,

    /// An action was dispatched against the empty feed.
    #[error("the library is empty")]
    EmptyLibrary,

    #[error("index {index} is out of range for {len} recently added tracks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown album: {0}")]
    UnknownAlbum(AlbumId),

    #[error("unknown artist: {0}")]
    UnknownArtist(String),

    #[error("unknown album artist: {0}")]
    UnknownAlbumArtist(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
