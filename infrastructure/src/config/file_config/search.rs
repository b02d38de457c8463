//! Search configuration from TOML (`[search]` section)
//!
//! Holds the generation parameters and the defaults that pre-fill the
//! search filter when the command line leaves a field out.

use chrono::NaiveDate;
use fairfinder_application::SearchParams;
use fairfinder_domain::{
    CATEGORIES, CITIES, Catalog, ConfigIssue, ConfigIssueCode, DEFAULT_TARGET_COUNT,
    InvitationFilter, PROVINCES, SearchFilter, SearchFilterBuilder,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Number of records to ask for
    pub target_count: usize,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Default province
    pub province: String,
    /// Default city
    pub city: String,
    /// Default industry category
    pub category: String,
    /// Default invitation type (free, paid, any)
    pub invitation: String,
    /// Default window length in months, starting today
    pub window_months: u32,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            temperature: 0.8,
            province: "Guangdong".to_string(),
            city: "Guangzhou".to_string(),
            category: "Any".to_string(),
            invitation: "Any".to_string(),
            window_months: 3,
        }
    }
}

impl FileSearchConfig {
    pub fn to_search_params(&self) -> SearchParams {
        SearchParams::default()
            .with_target_count(self.target_count)
            .with_temperature(self.temperature)
    }

    /// Builder pre-filled with the configured defaults and a window
    /// starting at `today`
    pub fn filter_builder(&self, today: NaiveDate) -> SearchFilterBuilder {
        let (start, end) = SearchFilter::default_window(today, self.window_months);
        SearchFilter::builder()
            .province(&self.province)
            .city(&self.city)
            .category(&self.category)
            .invitation(&self.invitation)
            .start_date(start.to_string())
            .end_date(end.to_string())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.target_count == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "search.target_count".to_string(),
                },
                "search.target_count must be at least 1",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "search.temperature".to_string(),
                },
                format!(
                    "search.temperature must be between 0.0 and 2.0, got {}",
                    self.temperature
                ),
            ));
        }

        for (catalog, value) in [
            (PROVINCES, &self.province),
            (CITIES, &self.city),
            (CATEGORIES, &self.category),
        ] {
            if let Some(issue) = unknown_catalog_value(&catalog, value) {
                issues.push(issue);
            }
        }

        if self.invitation.parse::<InvitationFilter>().is_err() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownCatalogValue {
                    field: "search.invitation".to_string(),
                    value: self.invitation.clone(),
                },
                format!(
                    "search.invitation: unknown value '{}', expected free, paid or any",
                    self.invitation
                ),
            ));
        }

        issues
    }
}

fn unknown_catalog_value(catalog: &Catalog, value: &str) -> Option<ConfigIssue> {
    if catalog.contains(value) {
        return None;
    }
    let field = format!("search.{}", catalog.field());
    Some(ConfigIssue::warning(
        ConfigIssueCode::UnknownCatalogValue {
            field: field.clone(),
            value: value.to_string(),
        },
        format!("{}: '{}' is not in the list", field, value),
    ))
}
