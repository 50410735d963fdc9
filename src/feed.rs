//! The "For You" feed: derived state over the library and the actions it
//! offers.
//!
//! `ForYou` keeps the expensive or random parts of the feed between pulls and
//! only recomputes them when the library, sort order or section settings
//! change. `Feed` is the snapshot handed to whoever draws it.

mod model;
mod section;

pub use model::{Feed, FeedAction, FeedContent, ForYou};
pub use section::{ForYouSection, Section, Suggestion, grid_rows};

#[cfg(test)]
mod tests;
