//! Exhibition record value object
//!
//! One synthetic trade-fair listing as produced by the generation service.
//! The JSON shape (camelCase keys, all fields required) is the single
//! canonical schema shared by the prompt, the parser, and the cache.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Invitation type of a generated exhibition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvitationType {
    #[serde(alias = "Free Invitation", alias = "free")]
    Free,
    #[serde(alias = "Paid Invitation", alias = "paid")]
    Paid,
}

impl InvitationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationType::Free => "Free",
            InvitationType::Paid => "Paid",
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, InvitationType::Free)
    }
}

impl fmt::Display for InvitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single exhibition listing (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    /// Identifier, unique within one batch (e.g. `canton-fair-2025-spring`)
    pub id: String,
    pub name: String,
    pub province: String,
    pub city: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub venue: String,
    pub organizer: String,
    pub website: Url,
    pub application_link: Url,
    pub invitation_type: InvitationType,
    pub verification_status: bool,
    pub consular_acceptance: bool,
}

/// A structural rule broken by a generated record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordViolation {
    #[error("record {index} has an empty name")]
    EmptyName { index: usize },

    #[error("record {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate id '{id}' in batch")]
    DuplicateId { id: String },
}

impl Exhibition {
    /// Check the per-record invariants (`index` is the position in the batch)
    pub fn check(&self, index: usize) -> Result<(), RecordViolation> {
        if self.id.trim().is_empty() {
            return Err(RecordViolation::EmptyId { index });
        }
        if self.name.trim().is_empty() {
            return Err(RecordViolation::EmptyName { index });
        }
        Ok(())
    }

    /// Number of days the exhibition runs, counting both ends
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn has_inverted_dates(&self) -> bool {
        self.start_date > self.end_date
    }
}
