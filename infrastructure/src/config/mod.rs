//! Configuration file loading for fairfinder
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FAIRFINDER_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./fairfinder.toml` or `./.fairfinder.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/fairfinder/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileCacheConfig, FileConfig, FileGeminiConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileSearchConfig,
};
pub use loader::ConfigLoader;
