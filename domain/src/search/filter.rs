//! Search filter value object
//!
//! A [`SearchFilter`] is built once per submitted search and never changes
//! afterwards. Construction enforces the catalog and date-range invariants,
//! so every filter that reaches the generation client is well-formed.

use super::catalog::{CATEGORIES, CITIES, PROVINCES, Selection};
use crate::core::error::DomainError;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invitation constraint requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvitationFilter {
    Free,
    Paid,
    /// Both free and paid invitations
    #[default]
    Any,
}

impl InvitationFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationFilter::Free => "Free",
            InvitationFilter::Paid => "Paid",
            InvitationFilter::Any => "Any",
        }
    }
}

impl fmt::Display for InvitationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InvitationFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" | "free invitation" => Ok(InvitationFilter::Free),
            "paid" | "paid invitation" => Ok(InvitationFilter::Paid),
            "any" | "*" | "" => Ok(InvitationFilter::Any),
            _ => Err(DomainError::InvalidInvitationType(s.to_string())),
        }
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(input.to_string()))
}

/// User-specified search criteria (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FilterFields")]
pub struct SearchFilter {
    province: Selection,
    city: Selection,
    category: Selection,
    invitation_type: InvitationFilter,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl SearchFilter {
    /// Create a filter from already-resolved selections.
    ///
    /// Fails when `start_date` is after `end_date`.
    pub fn new(
        province: Selection,
        city: Selection,
        category: Selection,
        invitation_type: InvitationFilter,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidFilter(format!(
                "start date {} is after end date {}",
                start_date, end_date
            )));
        }

        Ok(Self {
            province,
            city,
            category,
            invitation_type,
            start_date,
            end_date,
        })
    }

    /// Start building a filter from raw user input
    pub fn builder() -> SearchFilterBuilder {
        SearchFilterBuilder::default()
    }

    pub fn province(&self) -> &Selection {
        &self.province
    }

    pub fn city(&self) -> &Selection {
        &self.city
    }

    pub fn category(&self) -> &Selection {
        &self.category
    }

    pub fn invitation_type(&self) -> InvitationFilter {
        self.invitation_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whether `[start, end]` lies inside this filter's date range
    pub fn covers(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start >= self.start_date && end <= self.end_date && start <= end
    }

    /// Default search window: `today` through `today + months`.
    ///
    /// Month arithmetic clamps to the last day of the target month.
    pub fn default_window(today: NaiveDate, months: u32) -> (NaiveDate, NaiveDate) {
        let end = today
            .checked_add_months(Months::new(months))
            .unwrap_or(NaiveDate::MAX);
        (today, end)
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "province={} city={} category={} invitation={} dates={}..{}",
            self.province,
            self.city,
            self.category,
            self.invitation_type,
            self.start_date,
            self.end_date
        )
    }
}

/// Deserialization shadow of [`SearchFilter`] so the date invariant is
/// re-checked when a filter is read back from the cache.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterFields {
    province: Selection,
    city: Selection,
    category: Selection,
    invitation_type: InvitationFilter,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<FilterFields> for SearchFilter {
    type Error = DomainError;

    fn try_from(fields: FilterFields) -> Result<Self, Self::Error> {
        SearchFilter::new(
            fields.province,
            fields.city,
            fields.category,
            fields.invitation_type,
            fields.start_date,
            fields.end_date,
        )
    }
}

/// Builder that resolves raw strings against the catalogs
#[derive(Debug, Clone, Default)]
pub struct SearchFilterBuilder {
    province: Option<String>,
    city: Option<String>,
    category: Option<String>,
    invitation: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl SearchFilterBuilder {
    pub fn province(mut self, value: impl Into<String>) -> Self {
        self.province = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn invitation(mut self, value: impl Into<String>) -> Self {
        self.invitation = Some(value.into());
        self
    }

    pub fn start_date(mut self, value: impl Into<String>) -> Self {
        self.start_date = Some(value.into());
        self
    }

    pub fn end_date(mut self, value: impl Into<String>) -> Self {
        self.end_date = Some(value.into());
        self
    }

    /// Resolve every field and check the date range.
    ///
    /// Unset catalog fields default to the wildcard; both dates are required.
    pub fn build(self) -> Result<SearchFilter, DomainError> {
        let province = PROVINCES.parse(self.province.as_deref().unwrap_or_default())?;
        let city = CITIES.parse(self.city.as_deref().unwrap_or_default())?;
        let category = CATEGORIES.parse(self.category.as_deref().unwrap_or_default())?;
        let invitation: InvitationFilter = self.invitation.as_deref().unwrap_or_default().parse()?;

        let start_date = self
            .start_date
            .as_deref()
            .ok_or_else(|| DomainError::InvalidFilter("start date is required".to_string()))
            .and_then(parse_iso_date)?;
        let end_date = self
            .end_date
            .as_deref()
            .ok_or_else(|| DomainError::InvalidFilter("end date is required".to_string()))
            .and_then(parse_iso_date)?;

        SearchFilter::new(province, city, category, invitation, start_date, end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    fn guangzhou() -> SearchFilter {
        SearchFilter::builder()
            .province("Guangdong")
            .city("Guangzhou")
            .category("Any")
            .invitation("Any")
            .start_date("2025-01-01")
            .end_date("2025-04-01")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_resolves_fields() {
        let filter = guangzhou();
        assert_eq!(filter.province().value(), Some("Guangdong"));
        assert_eq!(filter.city().value(), Some("Guangzhou"));
        assert!(filter.category().is_any());
        assert_eq!(filter.invitation_type(), InvitationFilter::Any);
        assert_eq!(filter.start_date(), date("2025-01-01"));
        assert_eq!(filter.end_date(), date("2025-04-01"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = SearchFilter::builder()
            .start_date("2025-05-01")
            .end_date("2025-04-01")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidFilter(_)));
    }

    #[test]
    fn test_single_day_range_allowed() {
        let filter = SearchFilter::builder()
            .start_date("2025-04-15")
            .end_date("2025-04-15")
            .build();
        assert!(filter.is_ok());
    }

    #[test]
    fn test_missing_dates_rejected() {
        let err = SearchFilter::builder().start_date("2025-01-01").build().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidFilter("end date is required".to_string())
        );
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let err = SearchFilter::builder()
            .start_date("01/02/2025")
            .end_date("2025-04-01")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidDate("01/02/2025".to_string()));
    }

    #[test]
    fn test_unknown_province_rejected() {
        let err = SearchFilter::builder()
            .province("Narnia")
            .start_date("2025-01-01")
            .end_date("2025-04-01")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidCatalogValue { field: "province", .. }
        ));
    }

    #[test]
    fn test_invitation_filter_parse() {
        assert_eq!("free".parse::<InvitationFilter>().unwrap(), InvitationFilter::Free);
        assert_eq!(
            "Paid Invitation".parse::<InvitationFilter>().unwrap(),
            InvitationFilter::Paid
        );
        assert_eq!("ANY".parse::<InvitationFilter>().unwrap(), InvitationFilter::Any);
        assert!("vip".parse::<InvitationFilter>().is_err());
    }

    #[test]
    fn test_covers() {
        let filter = guangzhou();
        assert!(filter.covers(date("2025-01-10"), date("2025-01-14")));
        assert!(filter.covers(date("2025-01-01"), date("2025-04-01")));
        assert!(!filter.covers(date("2024-12-30"), date("2025-01-02")));
        assert!(!filter.covers(date("2025-03-30"), date("2025-04-02")));
        assert!(!filter.covers(date("2025-02-10"), date("2025-02-01")));
    }

    #[test]
    fn test_default_window_clamps_month_end() {
        let (start, end) = SearchFilter::default_window(date("2025-11-30"), 3);
        assert_eq!(start, date("2025-11-30"));
        assert_eq!(end, date("2026-02-28"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let filter = guangzhou();
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"invitationType\":\"Any\""));
        assert!(json.contains("\"startDate\":\"2025-01-01\""));

        let parsed: SearchFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, filter);
    }

    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let json = r#"{"province":"Any","city":"Any","category":"Any","invitationType":"Free","startDate":"2025-06-01","endDate":"2025-01-01"}"#;
        assert!(serde_json::from_str::<SearchFilter>(json).is_err());
    }
}
