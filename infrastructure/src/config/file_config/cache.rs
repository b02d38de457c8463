//! Result cache configuration from TOML (`[cache]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Keep the last successful batch between runs
    pub enabled: bool,
    /// Cache file location (default: `$XDG_DATA_HOME/fairfinder/cache.json`)
    pub path: Option<PathBuf>,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl FileCacheConfig {
    /// Configured path, or the per-user data directory default
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("fairfinder").join("cache.json")))
    }
}
