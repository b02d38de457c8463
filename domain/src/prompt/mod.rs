//! Prompt templates for the generation service.

pub mod template;

pub use template::{DEFAULT_TARGET_COUNT, ExhibitionPrompt, REQUIRED_FIELDS};
