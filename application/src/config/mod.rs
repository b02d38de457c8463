//! Application-level configuration.
//!
//! - [`SearchParams`]: generation request control (target count, temperature)

pub mod search_params;

pub use search_params::SearchParams;
