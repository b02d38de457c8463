//! Infrastructure layer for fairfinder
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use cache::JsonFileStore;
pub use config::{
    ConfigLoader, FileCacheConfig, FileConfig, FileGeminiConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileSearchConfig,
};
pub use gemini::GeminiGateway;
pub use logging::JsonlGenerationLogger;
