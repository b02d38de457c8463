//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generation_gateway;
pub mod generation_logger;
pub mod progress;
pub mod result_cache;
