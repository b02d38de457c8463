//! Batch of exhibitions from one successful generation

use super::record::{Exhibition, RecordViolation};
use crate::search::SearchFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All records produced by a single generation call, together with the
/// filter that requested them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BatchFields")]
pub struct ExhibitionBatch {
    pub filter: SearchFilter,
    pub fetched_at: DateTime<Utc>,
    pub exhibitions: Vec<Exhibition>,
}

/// Deserialization shadow of [`ExhibitionBatch`] so a cached batch goes
/// through the same record checks as a freshly generated one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchFields {
    filter: SearchFilter,
    fetched_at: DateTime<Utc>,
    exhibitions: Vec<Exhibition>,
}

impl TryFrom<BatchFields> for ExhibitionBatch {
    type Error = RecordViolation;

    fn try_from(fields: BatchFields) -> Result<Self, Self::Error> {
        ExhibitionBatch::new(fields.filter, fields.fetched_at, fields.exhibitions)
    }
}

/// How many records ignore the requested semantics.
///
/// These are reported, never rejected: the service is asked for plausible
/// data but nothing guarantees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlausibilityReport {
    /// Records whose dates fall outside the filter's range
    pub out_of_range: usize,
    /// Records whose start date is after their end date
    pub inverted_dates: usize,
}

impl PlausibilityReport {
    pub fn is_clean(&self) -> bool {
        self.out_of_range == 0 && self.inverted_dates == 0
    }
}

impl ExhibitionBatch {
    /// Assemble a batch, enforcing the per-record rules and id uniqueness
    pub fn new(
        filter: SearchFilter,
        fetched_at: DateTime<Utc>,
        exhibitions: Vec<Exhibition>,
    ) -> Result<Self, RecordViolation> {
        let mut seen = HashSet::with_capacity(exhibitions.len());
        for (index, record) in exhibitions.iter().enumerate() {
            record.check(index)?;
            if !seen.insert(record.id.as_str()) {
                return Err(RecordViolation::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        Ok(Self {
            filter,
            fetched_at,
            exhibitions,
        })
    }

    pub fn len(&self) -> usize {
        self.exhibitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibitions.is_empty()
    }

    pub fn plausibility(&self) -> PlausibilityReport {
        self.exhibitions
            .iter()
            .fold(PlausibilityReport::default(), |mut report, record| {
                if record.has_inverted_dates() {
                    report.inverted_dates += 1;
                } else if !self.filter.covers(record.start_date, record.end_date) {
                    report.out_of_range += 1;
                }
                report
            })
    }
}
