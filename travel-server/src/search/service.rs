//! Search service facade.
//!
//! Composes the debounced dispatcher over the cached webhook pipeline and
//! presents the interface the presentation layer consumes:
//! `search(query)` yielding either "no-op" (blank input) or a journey
//! list, never an error.

use std::sync::Arc;

use tracing::warn;

use crate::cache::CachedSearchClient;
use crate::domain::Journey;
use crate::search::config::SearchConfig;
use crate::search::dispatch::{BackendFailure, Dispatcher, SearchBackend};
use crate::webhook::{fallback, shape_results};

impl SearchBackend for CachedSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<Journey>, BackendFailure> {
        // The cached client is fail-open all the way down, so this is
        // infallible in practice; the Result is the dispatcher's seam.
        Ok(CachedSearchClient::search(self, query).await.as_ref().clone())
    }
}

/// The journey search entry point.
pub struct SearchService {
    dispatcher: Dispatcher<CachedSearchClient>,
}

impl SearchService {
    /// Create a service over a cached client.
    pub fn new(client: CachedSearchClient, config: &SearchConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::new(client), config.debounce_window()),
        }
    }

    /// Run a search.
    ///
    /// Returns `None` for blank input (no call issued, prior results are
    /// the caller's to keep) and `Some(list)` otherwise. The list is never
    /// an error: transport failures already degraded to fallback data
    /// below, and a dispatch-level failure degrades to the same fallback
    /// here, keeping the whole pipeline fail-open.
    pub async fn search(&self, query: &str) -> Option<Vec<Journey>> {
        match self.dispatcher.search(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query, error = %e, "dispatch failed, serving fallback data");
                Some(shape_results(&fallback::placeholder()))
            }
        }
    }
}
