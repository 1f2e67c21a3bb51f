//! Application state for the web layer.

use std::sync::Arc;

use crate::search::SearchService;
use crate::stay::StayCatalog;

/// Shared application state.
///
/// Contains the services needed to handle requests. Configuration is
/// injected here at construction; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// Journey search service (debounced, cached, fail-open).
    pub search: Arc<SearchService>,

    /// Stay catalog.
    pub stays: Arc<StayCatalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(search: SearchService, stays: StayCatalog) -> Self {
        Self {
            search: Arc::new(search),
            stays: Arc::new(stays),
        }
    }
}
