//! Application layer for fairfinder
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SearchParams;
pub use ports::{
    generation_gateway::{GatewayError, GenerationGateway, GenerationRequest},
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    progress::{NoProgress, SearchProgressNotifier},
    result_cache::{CacheError, KeyValueStore, MemoryStore, RESULTS_KEY, ResultCache},
};
pub use use_cases::fetch_exhibitions::{FetchError, FetchExhibitionsUseCase, parse_exhibitions};
pub use use_cases::search_session::{ResultsView, SearchSession};
