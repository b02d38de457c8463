//! Generation Gateway port
//!
//! Defines the interface for talking to the external text-generation service.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No API key configured: {0}")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether this error comes from local configuration rather than the service
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::MissingCredential(_))
    }
}

/// One structured-output generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// Schema the service must shape its output after
    pub response_schema: Value,
    /// Sampling temperature
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, response_schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema,
            temperature: 0.8,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Gateway to the text-generation service
///
/// This port defines how the application layer submits generation requests.
/// Implementations (adapters) live in the infrastructure layer; tests use
/// scripted stand-ins.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Submit one request and return the raw generated text.
    ///
    /// Exactly one remote call per invocation; implementations must not retry.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;

    /// Model identifier used for requests (for logs and the UI)
    fn model_name(&self) -> &str;
}
