//! Settings store: configuration schema, loading, and the persisted sort state.
//!
//! `Settings` comes from an optional TOML file layered under `FORYOU__*`
//! environment variables. The last used song sort lives in a separate state
//! file because it is written by the app, not the user.

mod load;
mod schema;
mod state;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
pub use state::{default_state_path, load_sort_state, resolve_state_path, save_sort_state};
