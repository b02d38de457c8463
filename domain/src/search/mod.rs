//! Search criteria: the filter value object and the catalogs it draws from.

pub mod catalog;
pub mod filter;

pub use catalog::{CATEGORIES, CITIES, Catalog, PROVINCES, Selection, WILDCARD};
pub use filter::{InvitationFilter, SearchFilter, SearchFilterBuilder, parse_iso_date};
