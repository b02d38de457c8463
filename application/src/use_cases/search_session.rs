//! Search session
//!
//! Owns the state the user sees between searches: the current results, the
//! last error, whether a request is in flight, and which view is active. It
//! also decides when the result cache is read and written.
//!
//! `search` takes `&mut self`, so a session runs at most one request at a
//! time; a new search can only start once the previous one has finished.

use super::fetch_exhibitions::{FetchError, FetchExhibitionsUseCase};
use crate::ports::generation_gateway::GenerationGateway;
use crate::ports::progress::{NoProgress, SearchProgressNotifier};
use crate::ports::result_cache::{CacheError, ResultCache};
use fairfinder_domain::{
    Exhibition, ExhibitionBatch, GroupCount, SearchFilter, SearchFilterBuilder,
    group_by_invitation_type, group_by_province,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Which rendering of the results is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Results,
    Charts,
}

/// Presentation state around the fetch use case
pub struct SearchSession<G: GenerationGateway + 'static> {
    fetch: FetchExhibitionsUseCase<G>,
    cache: Option<ResultCache>,
    filter: Option<SearchFilter>,
    results: Vec<Exhibition>,
    last_error: Option<String>,
    /// Shared so progress callbacks can observe it while a request runs
    in_flight: Arc<AtomicBool>,
    view: ResultsView,
}

impl<G: GenerationGateway + 'static> SearchSession<G> {
    /// Create an empty session; pass `None` to run without a cache
    pub fn new(fetch: FetchExhibitionsUseCase<G>, cache: Option<ResultCache>) -> Self {
        Self {
            fetch,
            cache,
            filter: None,
            results: Vec::new(),
            last_error: None,
            in_flight: Arc::new(AtomicBool::new(false)),
            view: ResultsView::default(),
        }
    }

    /// Pre-populate the results from the cache.
    ///
    /// Meant to be called once at startup. Returns `true` when a cached batch
    /// was shown. A corrupt cache entry is logged and ignored.
    pub fn restore(&mut self) -> bool {
        let Some(cache) = &self.cache else {
            return false;
        };

        match cache.load() {
            Ok(Some(batch)) => {
                info!("Restored {} exhibitions from cache", batch.len());
                self.apply_batch(batch);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Ignoring unreadable result cache: {}", e);
                false
            }
        }
    }

    /// Validate raw form input, then search.
    ///
    /// An invalid filter is rejected here, before any remote call.
    pub async fn submit(
        &mut self,
        input: SearchFilterBuilder,
        progress: &dyn SearchProgressNotifier,
    ) -> Result<usize, FetchError> {
        match input.build() {
            Ok(filter) => self.search_with_progress(filter, progress).await,
            Err(e) => {
                let error = FetchError::Validation(e);
                self.results.clear();
                self.last_error = Some(error.user_message());
                Err(error)
            }
        }
    }

    /// Run one search with no progress reporting
    pub async fn search(&mut self, filter: SearchFilter) -> Result<usize, FetchError> {
        self.search_with_progress(filter, &NoProgress).await
    }

    /// Run one search.
    ///
    /// On success the batch replaces the results and overwrites the cache.
    /// On failure the results are cleared and `last_error` is set. The
    /// in-flight flag is always false again when this returns.
    pub async fn search_with_progress(
        &mut self,
        filter: SearchFilter,
        progress: &dyn SearchProgressNotifier,
    ) -> Result<usize, FetchError> {
        self.last_error = None;
        self.in_flight.store(true, Ordering::SeqCst);
        self.view = ResultsView::Results;
        self.filter = Some(filter.clone());

        let outcome = self.fetch.execute_with_progress(&filter, progress).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Ok(batch) => {
                let count = batch.len();
                if let Some(cache) = &self.cache
                    && let Err(e) = cache.store(&batch)
                {
                    warn!("Could not write result cache: {}", e);
                }
                self.apply_batch(batch);
                Ok(count)
            }
            Err(e) => {
                self.results.clear();
                self.last_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Drop the cached batch. Results already on screen stay.
    pub fn clear_cache(&self) -> Result<(), CacheError> {
        match &self.cache {
            Some(cache) => cache.clear(),
            None => Ok(()),
        }
    }

    fn apply_batch(&mut self, batch: ExhibitionBatch) {
        self.filter = Some(batch.filter);
        self.results = batch.exhibitions;
    }

    pub fn results(&self) -> &[Exhibition] {
        &self.results
    }

    pub fn filter(&self) -> Option<&SearchFilter> {
        self.filter.as_ref()
    }

    /// Whether a search has been submitted or restored at least once
    pub fn has_searched(&self) -> bool {
        self.filter.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn view(&self) -> ResultsView {
        self.view
    }

    pub fn set_view(&mut self, view: ResultsView) {
        self.view = view;
    }

    pub fn province_chart(&self) -> Vec<GroupCount> {
        group_by_province(&self.results)
    }

    pub fn invitation_chart(&self) -> Vec<GroupCount> {
        group_by_invitation_type(&self.results)
    }
}
