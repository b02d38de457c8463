//! Gemini `generateContent` adapter
//!
//! Implements the [`GenerationGateway`](fairfinder_application::GenerationGateway)
//! port over the Generative Language REST API.

mod gateway;
pub mod types;

pub use gateway::GeminiGateway;
