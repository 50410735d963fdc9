use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sort::SongSort;

/// On-disk layout of the state file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct StateFile {
    songs: Option<SongSort>,
}

/// Resolve the state file from `FORYOU_STATE_PATH` or XDG defaults.
pub fn resolve_state_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("FORYOU_STATE_PATH") {
        return Some(PathBuf::from(p));
    }
    default_state_path()
}

/// `$XDG_STATE_HOME/foryou/state.toml`, or `~/.local/state/foryou/state.toml`.
pub fn default_state_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("foryou").join("state.toml"))
}

/// Read the last used song sort. A missing file is not an error.
pub fn load_sort_state(path: &Path) -> Result<Option<SongSort>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no state file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let state: StateFile = toml::from_str(&raw)?;
    Ok(state.songs)
}

/// Persist `sort` as the last used song sort, creating parent directories.
pub fn save_sort_state(path: &Path, sort: SongSort) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string(&StateFile { songs: Some(sort) })?;
    fs::write(path, raw)?;
    debug!("saved sort state to {}", path.display());
    Ok(())
}
