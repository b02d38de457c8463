//! Generation transcript writers

mod jsonl_logger;

pub use jsonl_logger::JsonlGenerationLogger;
