//! `foryou`: the "For You" home feed of a local music library.
//!
//! The crate scans a music directory, groups its tracks into albums and
//! artists, and derives the home feed from them: the whole library sorted by
//! the last used sort order, a "recently added" carousel and random
//! suggestion sections. Feed actions are handed to a [`player::Radio`] or a
//! [`nav::Navigator`]; actually playing audio or drawing anything is left to
//! whoever implements those.

pub mod artwork;
pub mod config;
pub mod error;
pub mod feed;
pub mod library;
pub mod nav;
pub mod pick;
pub mod player;
pub mod sort;

pub use error::{Error, Result};
