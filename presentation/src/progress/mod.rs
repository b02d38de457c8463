//! Progress reporting while a search is in flight

pub mod reporter;
