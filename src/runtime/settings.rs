use log::warn;

use foryou::config::{self, Settings};
use foryou::sort::SongSort;

use crate::Cli;

pub fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(e) = s.validate() {
                warn!("{e}; using defaults");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the feed from showing.
            warn!("{e}; using defaults");
            Settings::default()
        }
    }
}

/// Sort order for this run: command line, then the saved state, then the
/// config file.
pub fn resolve_sort(cli: &Cli, settings: &Settings) -> foryou::Result<SongSort> {
    let state_path = config::resolve_state_path();

    if let Some(by) = cli.sort {
        let sort = SongSort::new(by, cli.reverse);
        if cli.remember {
            match &state_path {
                Some(path) => config::save_sort_state(path, sort)?,
                None => warn!("no state directory; not saving sort"),
            }
        }
        return Ok(sort);
    }

    let saved = match &state_path {
        Some(path) => config::load_sort_state(path).unwrap_or_else(|e| {
            warn!("ignoring unreadable sort state: {e}");
            None
        }),
        None => None,
    };
    let mut sort = saved.unwrap_or_else(|| settings.songs.sort());
    if cli.reverse {
        sort.reversed = !sort.reversed;
    }
    Ok(sort)
}
