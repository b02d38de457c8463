//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant describes input that violates a value object's invariants.
/// They are raised before anything leaves the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Unknown {field} '{value}'")]
    InvalidCatalogValue { field: &'static str, value: String },

    #[error("Invalid invitation type '{0}' (expected free, paid or any)")]
    InvalidInvitationType(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
