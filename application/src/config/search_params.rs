//! Search parameters: generation request control.
//!
//! [`SearchParams`] groups the static knobs of the generation request used
//! by [`FetchExhibitionsUseCase`](crate::use_cases::fetch_exhibitions::FetchExhibitionsUseCase).
//! These are application-layer concerns, not part of the filter.

use fairfinder_domain::DEFAULT_TARGET_COUNT;
use serde::{Deserialize, Serialize};

/// Generation request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Number of exhibitions asked for. The service may return a different count.
    pub target_count: usize,
    /// Sampling temperature passed to the generation service.
    pub temperature: f32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            temperature: 0.8,
        }
    }
}

impl SearchParams {
    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_count = count;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SearchParams::default();
        assert_eq!(params.target_count, 10);
        assert!((params.temperature - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builders() {
        let params = SearchParams::default()
            .with_target_count(4)
            .with_temperature(0.2);
        assert_eq!(params.target_count, 4);
        assert!((params.temperature - 0.2).abs() < f32::EPSILON);
    }
}
