use std::{env, path::PathBuf};

use log::debug;

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then environment
/// variables (prefix `FORYOU__`), falling back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            debug!("reading config from {}", path.display());
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("FORYOU")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("feed.sections")
                .with_list_parse_key("library.extensions")
                .with_list_parse_key("artwork.file_names")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings the feed cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.feed.grid_columns == 0 {
            return Err(Error::InvalidConfig("feed.grid_columns must be >= 1".to_string()));
        }
        if self.feed.suggestion_count == 0 && !self.feed.sections.is_empty() {
            return Err(Error::InvalidConfig(
                "feed.suggestion_count must be >= 1 when sections are enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `FORYOU_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("FORYOU_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/foryou/config.toml`
/// or `~/.config/foryou/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("foryou").join("config.toml"))
}
