//! Enumerated filter values offered by the search form.
//!
//! Each [`Catalog`] is a fixed list of canonical names. User input is
//! matched case-insensitively and normalized to the canonical spelling, or
//! to [`Selection::Any`] for the wildcard.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wildcard spelling used in forms, config files and JSON
pub const WILDCARD: &str = "Any";

/// A fixed list of values for one filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    field: &'static str,
    entries: &'static [&'static str],
}

pub const PROVINCES: Catalog = Catalog {
    field: "province",
    entries: &[
        "Anhui",
        "Beijing",
        "Chongqing",
        "Fujian",
        "Gansu",
        "Guangdong",
        "Guangxi",
        "Guizhou",
        "Hainan",
        "Hebei",
        "Heilongjiang",
        "Henan",
        "Hubei",
        "Hunan",
        "Inner Mongolia",
        "Jiangsu",
        "Jiangxi",
        "Jilin",
        "Liaoning",
        "Ningxia",
        "Qinghai",
        "Shaanxi",
        "Shandong",
        "Shanghai",
        "Shanxi",
        "Sichuan",
        "Tianjin",
        "Tibet",
        "Xinjiang",
        "Yunnan",
        "Zhejiang",
        "Hong Kong",
        "Macau",
        "Taiwan",
    ],
};

pub const CITIES: Catalog = Catalog {
    field: "city",
    entries: &[
        "Guangzhou",
        "Shanghai",
        "Shenzhen",
        "Beijing",
        "Yiwu",
        "Hangzhou",
        "Chengdu",
        "Xiamen",
        "Ningbo",
        "Tianjin",
        "Qingdao",
        "Changsha",
        "Nanjing",
        "Suzhou",
        "Foshan",
    ],
};

pub const CATEGORIES: Catalog = Catalog {
    field: "category",
    entries: &[
        "General Trade",
        "Electronics",
        "Textiles & Fashion",
        "Machinery & Industrial",
        "Construction & Building Materials",
        "Food & Beverage",
        "Furniture & Home Decor",
        "Automotive & Parts",
        "Health & Medical",
        "Beauty & Cosmetics",
        "Agriculture",
        "Technology & AI",
        "Tourism & Hospitality",
        "Energy & Environment",
    ],
};

impl Catalog {
    /// Field name used in error messages ("province", "city", ...)
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Canonical entries, without the wildcard
    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Resolve user input against this catalog.
    ///
    /// `Any`, `*` and blank input select the wildcard.
    pub fn parse(&self, input: &str) -> Result<Selection, DomainError> {
        let trimmed = input.trim();
        if is_wildcard(trimmed) {
            return Ok(Selection::Any);
        }

        self.entries
            .iter()
            .find(|entry| entry.eq_ignore_ascii_case(trimmed))
            .map(|entry| Selection::Only(entry.to_string()))
            .ok_or_else(|| DomainError::InvalidCatalogValue {
                field: self.field,
                value: trimmed.to_string(),
            })
    }

    /// Whether `value` is an entry or a wildcard spelling
    pub fn contains(&self, value: &str) -> bool {
        self.parse(value).is_ok()
    }
}

fn is_wildcard(input: &str) -> bool {
    input.is_empty() || input == "*" || input.eq_ignore_ascii_case(WILDCARD)
}

/// A filter field value: either the wildcard or one canonical catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No constraint
    #[default]
    Any,
    Only(String),
}

impl Selection {
    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => WILDCARD,
            Selection::Only(value) => value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    /// The constrained value, or `None` for the wildcard
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::Any => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Catalog membership is checked by the filter builder; a persisted
        // filter is taken as written.
        let s = String::deserialize(deserializer)?;
        let trimmed = s.trim();
        Ok(if is_wildcard(trimmed) {
            Selection::Any
        } else {
            Selection::Only(trimmed.to_string())
        })
    }
}
