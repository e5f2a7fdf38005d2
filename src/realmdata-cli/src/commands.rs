//! Command handlers for the realmdata CLI.

pub mod configure;
pub mod export;
pub mod lookup;
pub mod stats;

use std::path::PathBuf;

use crate::config::Config;

/// Pick the data directory: explicit argument first, then the configured
/// default, then the conventional `data` directory.
pub fn resolve_data_dir(arg: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = arg {
        return dir;
    }
    if let Ok(config) = Config::load() {
        if let Some(dir) = config.get_data_dir() {
            return dir.to_path_buf();
        }
    }
    PathBuf::from("data")
}
