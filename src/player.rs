//! Playback seam: queue construction and the radio that hands queues to a
//! playback engine.
//!
//! The engine itself lives elsewhere; this module only decides what gets
//! queued, in which order, and where playback starts.

mod queue;
mod radio;
mod types;

pub use queue::Queue;
pub use radio::{ChannelRadio, Radio};
pub use types::{PlayOptions, PlayerCmd};

#[cfg(test)]
mod tests;
