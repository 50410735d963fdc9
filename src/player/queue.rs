use rand::Rng;
use rand::seq::SliceRandom;

use crate::library::TrackId;

use super::types::PlayOptions;

/// An ordered playback queue and the position playback starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    pub tracks: Vec<TrackId>,
    pub position: usize,
    pub shuffled: bool,
}

impl Queue {
    /// Build a queue from `tracks`.
    ///
    /// Without shuffle the order is kept and playback starts at
    /// `options.index`, clamped to the last track. With shuffle the tracks are
    /// permuted and playback starts at the front.
    pub fn build<R>(mut tracks: Vec<TrackId>, options: PlayOptions, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if options.shuffle {
            tracks.shuffle(rng);
            return Self {
                tracks,
                position: 0,
                shuffled: true,
            };
        }

        let position = options.index.min(tracks.len().saturating_sub(1));
        Self {
            tracks,
            position,
            shuffled: false,
        }
    }

    /// The track playback starts with.
    pub fn current(&self) -> Option<TrackId> {
        self.tracks.get(self.position).copied()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
