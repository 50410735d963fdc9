//! Stand-in playback engine: announces queues instead of playing audio.

use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use foryou::library::Library;
use foryou::player::{ChannelRadio, PlayerCmd};

pub fn spawn_engine(library: &Library, rx: Receiver<PlayerCmd>) -> JoinHandle<()> {
    let titles: Vec<String> = library.tracks().iter().map(|t| t.title.clone()).collect();

    thread::spawn(move || {
        while let Ok(cmd) = rx.recv() {
            match cmd {
                PlayerCmd::PlayQueue(queue) => {
                    let now = queue
                        .current()
                        .and_then(|id| titles.get(id))
                        .map(String::as_str)
                        .unwrap_or("?");
                    println!(
                        "\n▶ Now playing: {now} ({} of {}{})",
                        queue.position + 1,
                        queue.len(),
                        if queue.shuffled { ", shuffled" } else { "" }
                    );
                }
                PlayerCmd::Quit => break,
            }
        }
        debug!("engine stopped");
    })
}

/// Ask the engine to quit and wait for it. Returns whether it shut down
/// cleanly.
pub fn stop_engine(radio: &ChannelRadio, engine: JoinHandle<()>) -> bool {
    let mut clean = true;
    if let Err(e) = radio.send(PlayerCmd::Quit) {
        warn!("could not stop the playback engine: {e}");
        clean = false;
    }
    if engine.join().is_err() {
        warn!("playback engine thread panicked");
        clean = false;
    }
    clean
}
