//! Progress notification port
//!
//! Defines the interface for reporting a search while it is in flight.

use fairfinder_domain::SearchFilter;

/// Callback for search progress
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait SearchProgressNotifier: Send + Sync {
    /// Called right before the generation request is sent
    fn on_search_start(&self, filter: &SearchFilter);

    /// Called once the request finished; `count` is the number of records on success
    fn on_search_complete(&self, success: bool, count: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SearchProgressNotifier for NoProgress {
    fn on_search_start(&self, _filter: &SearchFilter) {}
    fn on_search_complete(&self, _success: bool, _count: usize) {}
}
