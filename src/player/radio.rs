use std::sync::mpsc::{self, Receiver, Sender};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::library::TrackId;

use super::queue::Queue;
use super::types::{PlayOptions, PlayerCmd};

/// The playback service the feed talks to.
pub trait Radio {
    /// Replace the queue with `tracks` and start playing.
    fn play_queue(&mut self, tracks: Vec<TrackId>, options: PlayOptions) -> Result<()>;
}

/// A [`Radio`] that builds queues locally and sends them to a playback engine
/// over a channel.
pub struct ChannelRadio {
    tx: Sender<PlayerCmd>,
    rng: StdRng,
}

impl ChannelRadio {
    pub fn new(tx: Sender<PlayerCmd>) -> Self {
        Self {
            tx,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [`ChannelRadio::new`], with a fixed shuffle seed.
    pub fn with_seed(tx: Sender<PlayerCmd>, seed: u64) -> Self {
        Self {
            tx,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a radio and the receiving end the playback engine listens on.
    pub fn channel() -> (Self, Receiver<PlayerCmd>) {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        (Self::new(tx), rx)
    }

    pub fn send(&self, cmd: PlayerCmd) -> Result<()> {
        self.tx.send(cmd).map_err(|_| Error::PlayerDisconnected)
    }
}

impl Radio for ChannelRadio {
    fn play_queue(&mut self, tracks: Vec<TrackId>, options: PlayOptions) -> Result<()> {
        if tracks.is_empty() {
            debug!("ignoring request to play an empty queue");
            return Ok(());
        }

        let queue = Queue::build(tracks, options, &mut self.rng);
        info!(
            "queueing {} tracks from position {}{}",
            queue.len(),
            queue.position,
            if queue.shuffled { " (shuffled)" } else { "" }
        );
        self.send(PlayerCmd::PlayQueue(queue))
    }
}
