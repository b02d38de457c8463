//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fetch_exhibitions;
pub mod search_session;
#[cfg(test)]
pub(crate) mod test_support;
