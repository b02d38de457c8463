//! Domain layer for fairfinder
//!
//! This crate contains the core value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Search filter
//!
//! A [`SearchFilter`] captures what the user asked for: province, city,
//! category, invitation type, and a date range. Enumerated fields are
//! resolved against fixed catalogs ([`PROVINCES`], [`CITIES`],
//! [`CATEGORIES`]), with `Any` as the wildcard.
//!
//! ## Exhibitions
//!
//! An [`Exhibition`] is one synthetic listing returned by the generation
//! service; an [`ExhibitionBatch`] is everything one request returned.
//! [`group_by_province`] and [`group_by_invitation_type`] feed the charts.

pub mod config;
pub mod core;
pub mod exhibition;
pub mod prompt;
pub mod search;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, string::truncate};
pub use exhibition::{
    Exhibition, ExhibitionBatch, GroupCount, InvitationType, PlausibilityReport, RecordViolation,
    group_by_invitation_type, group_by_province,
};
pub use prompt::{DEFAULT_TARGET_COUNT, ExhibitionPrompt, REQUIRED_FIELDS};
pub use search::{
    CATEGORIES, CITIES, Catalog, InvitationFilter, PROVINCES, SearchFilter, SearchFilterBuilder,
    Selection, WILDCARD, parse_iso_date,
};
