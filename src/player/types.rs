use super::queue::Queue;

/// How a queue should start playing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    /// Queue position to start from (ignored when shuffling).
    pub index: usize,
    /// Play the queue in a random order.
    pub shuffle: bool,
}

impl PlayOptions {
    pub fn at(index: usize) -> Self {
        Self {
            index,
            shuffle: false,
        }
    }

    pub fn shuffled() -> Self {
        Self {
            index: 0,
            shuffle: true,
        }
    }
}

/// Commands sent to the playback engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCmd {
    /// Replace the current queue and start playing it.
    PlayQueue(Queue),
    /// Stop playback and shut the engine down.
    Quit,
}
