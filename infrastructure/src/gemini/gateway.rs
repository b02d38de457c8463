//! Gemini gateway implementation
//!
//! One `generateContent` call per [`GenerationGateway::generate`]; no retries.

use super::types;
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use fairfinder_application::{GatewayError, GenerationGateway, GenerationRequest};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub struct GeminiGateway {
    client: Client,
    model: String,
    base_url: String,
    api_key: Option<String>,
    /// Env var the key was expected in, for error messages
    api_key_env: String,
}

impl GeminiGateway {
    /// Build a gateway from config, resolving the API key from the
    /// configured sources.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, GatewayError> {
        Self::new(config, config.resolve_api_key())
    }

    /// Build a gateway with an explicit key.
    ///
    /// A missing key is accepted here and reported by `generate`, so the
    /// caller can decide how early to check [`has_credential`](Self::has_credential).
    pub fn new(config: &FileGeminiConfig, api_key: Option<String>) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl GenerationGateway for GeminiGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::MissingCredential(self.api_key_env.clone()))?;

        let url = types::endpoint(&self.base_url, &self.model);
        let body = types::build_request_body(request);

        debug!(
            model = %self.model,
            prompt_bytes = request.prompt.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| types::convert_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let text = types::extract_text(&json)?;
        debug!(model = %self.model, bytes = text.len(), "Gemini response received");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
