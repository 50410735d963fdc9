use std::env;
use std::io;
use std::path::PathBuf;

use foryou::artwork::FolderArtwork;
use foryou::feed::ForYou;
use foryou::library::{Library, scan};
use foryou::nav::RouteHistory;
use foryou::player::{ChannelRadio, PlayerCmd};

use crate::Cli;

mod engine;
mod print;
mod settings;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    let sort = settings::resolve_sort(&cli, &settings)?;

    let dir = cli.dir.clone().unwrap_or_else(|| {
        env::current_dir().unwrap_or_else(|_| PathBuf::from("Music"))
    });

    let library = Library::from_tracks(scan(&dir, &settings.library));

    let mut for_you = match cli.seed {
        Some(seed) => ForYou::with_seed(seed),
        None => ForYou::new(),
    };
    let feed = for_you.feed(&library, sort, &settings.feed);

    let artwork = FolderArtwork::new(&settings.artwork);
    let mut stdout = io::stdout();
    print::print_feed(&mut stdout, &feed, &artwork)?;

    let Some(action) = cli.action.to_action() else {
        return Ok(());
    };

    let (tx, rx) = std::sync::mpsc::channel::<PlayerCmd>();
    let engine = engine::spawn_engine(&library, rx);
    let mut radio = match cli.seed {
        Some(seed) => ChannelRadio::with_seed(tx, seed),
        None => ChannelRadio::new(tx),
    };
    let mut navigator = RouteHistory::default();

    let result = feed.dispatch(&action, &mut radio, &mut navigator);

    // Let the engine drain what it was sent before exiting.
    engine::stop_engine(&radio, engine);
    result?;

    if let Some(route) = navigator.current() {
        print::print_route(&mut stdout, &library, route, &artwork)?;
    }
    Ok(())
}
