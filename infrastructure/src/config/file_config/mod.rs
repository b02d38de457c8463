//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod cache;
mod gemini;
mod logging;
mod output;
mod search;

pub use cache::FileCacheConfig;
pub use gemini::FileGeminiConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use search::FileSearchConfig;

use fairfinder_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service settings
    pub gemini: FileGeminiConfig,
    /// Search defaults and generation parameters
    pub search: FileSearchConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Result cache settings
    pub cache: FileCacheConfig,
    /// Transcript and log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// A missing API key is not checked here; see
    /// [`FileGeminiConfig::resolve_api_key`].
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.gemini.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.timeout_seconds".to_string(),
                },
                "gemini.timeout_seconds cannot be 0",
            ));
        }

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.model".to_string(),
                },
                "gemini.model cannot be empty",
            ));
        }

        issues.extend(self.search.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairfinder_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-flash"
api_key_env = "MY_GEMINI_KEY"
timeout_seconds = 30

[search]
target_count = 5
temperature = 0.4
province = "Zhejiang"
city = "Hangzhou"

[output]
format = "charts"
color = false

[cache]
enabled = false

[logging]
transcript_dir = "/tmp/fairfinder-logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_seconds, 30);
        assert_eq!(config.search.target_count, 5);
        assert_eq!(config.search.province, "Zhejiang");
        assert_eq!(config.output.format, Some(OutputFormat::Charts));
        assert!(!config.output.color);
        assert!(!config.cache.enabled);
        assert!(config.logging.transcript_dir.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[search]
city = "Shenzhen"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.city, "Shenzhen");
        // Defaults should apply
        assert_eq!(config.search.province, "Guangdong");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert!(config.output.color);
        assert!(config.cache.enabled);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[gemini]
timeout_seconds = 0

[search]
target_count = 0
city = "Atlantis"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 3);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::UnknownCatalogValue { field, .. } if field == "search.city"
        )));
    }
}
