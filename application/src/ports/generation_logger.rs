//! Port for the structured generation transcript.
//!
//! Defines the [`GenerationLogger`] trait for recording what was sent to the
//! generation service and what came back, as machine-readable events.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps the full prompt and raw
//! response text for later inspection.

use serde_json::Value;

/// A structured generation event.
///
/// Each event has a type string and a JSON payload with event-specific fields.
pub struct GenerationEvent {
    /// Event type identifier ("generation_request", "generation_response", "generation_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and infallible; write failures are dropped.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
