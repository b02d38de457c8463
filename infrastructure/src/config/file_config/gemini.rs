//! Generation service configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

/// Fallback environment variable checked after `api_key_env`
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier (default: "gemini-2.5-pro").
    pub model: String,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "API_KEY".to_string(),
            api_key: None,
            timeout_seconds: 120,
        }
    }
}

impl FileGeminiConfig {
    /// Find the API key: explicit `api_key`, then `$api_key_env`, then
    /// `$GEMINI_API_KEY`. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_blank = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };

        self.api_key
            .clone()
            .and_then(non_blank)
            .or_else(|| lookup(&self.api_key_env).and_then(non_blank))
            .or_else(|| lookup(FALLBACK_API_KEY_ENV).and_then(non_blank))
    }
}
