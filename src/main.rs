use std::path::PathBuf;

use clap::{Args, Parser};
use env_logger::Env;

use foryou::feed::FeedAction;
use foryou::sort::SongSortBy;

mod runtime;

/// Print the "For You" home feed of a music directory and act on it.
#[derive(Parser, Debug)]
#[command(name = "foryou", version, about, long_about = None)]
pub struct Cli {
    /// Music directory to scan (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Sort key for "play all": title, artist, album, album-artist, duration,
    /// date-added, track-number, filename
    #[arg(long)]
    pub sort: Option<SongSortBy>,

    /// Reverse the sort order
    #[arg(long)]
    pub reverse: bool,

    /// Save --sort/--reverse as the last used sort
    #[arg(long, requires = "sort")]
    pub remember: bool,

    /// Seed for suggestions and shuffling, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub action: ActionArgs,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ActionArgs {
    /// Play every track in the current sort order
    #[arg(long)]
    pub play_all: bool,

    /// Play every track shuffled
    #[arg(long)]
    pub shuffle: bool,

    /// Play the recently added list starting at this tile
    #[arg(long, value_name = "TILE")]
    pub recent: Option<usize>,

    /// Open an album by id
    #[arg(long, value_name = "ID")]
    pub album: Option<String>,

    /// Open an artist by name
    #[arg(long, value_name = "NAME")]
    pub artist: Option<String>,

    /// Open an album artist by name
    #[arg(long, value_name = "NAME")]
    pub album_artist: Option<String>,
}

impl ActionArgs {
    pub fn to_action(&self) -> Option<FeedAction> {
        if self.play_all {
            return Some(FeedAction::PlayAll);
        }
        if self.shuffle {
            return Some(FeedAction::ShufflePlay);
        }
        if let Some(i) = self.recent {
            return Some(FeedAction::PlayRecent(i));
        }
        if let Some(id) = &self.album {
            return Some(FeedAction::OpenAlbum(id.as_str().into()));
        }
        if let Some(name) = &self.artist {
            return Some(FeedAction::OpenArtist(name.clone()));
        }
        self.album_artist
            .as_ref()
            .map(|name| FeedAction::OpenAlbumArtist(name.clone()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    runtime::run(cli)
}
