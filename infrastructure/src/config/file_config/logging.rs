//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for JSONL generation transcripts; unset disables them
    pub transcript_dir: Option<PathBuf>,
    /// Directory for the daily-rolling tracing log; unset logs to stderr only
    pub log_dir: Option<PathBuf>,
}
