//! Presentation-session state.
//!
//! One `SearchSession` per user-facing search screen: the current result
//! list, the active filter, the active tab, and the recent-search history.
//! The session is single-owner, mutated only through `&mut self`, so no
//! locks are involved; the async service it drives lives behind an `Arc`.

use std::sync::Arc;

use crate::domain::{Journey, toggle_saved};
use crate::search::config::SearchConfig;
use crate::search::filter::{Filter, apply_filter};
use crate::search::recent::RecentSearches;
use crate::search::service::SearchService;

/// The high-level view tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Journey search (trains and buses).
    #[default]
    Transport,
    /// Stay search.
    Stay,
}

/// Mutable state of one search screen session.
pub struct SearchSession {
    service: Arc<SearchService>,
    results: Vec<Journey>,
    active_filter: Filter,
    active_tab: Tab,
    recent: RecentSearches,
}

impl SearchSession {
    /// Create a fresh session over a shared service.
    pub fn new(service: Arc<SearchService>, config: &SearchConfig) -> Self {
        Self {
            service,
            results: Vec::new(),
            active_filter: Filter::None,
            active_tab: Tab::default(),
            recent: RecentSearches::new(config.recent_capacity),
        }
    }

    /// Run a search and replace the result list wholesale.
    ///
    /// Blank input is a no-op: prior results, filter and history are left
    /// untouched. A performed search records the query in the recent
    /// history and resets the active filter, matching a fresh result set.
    pub async fn run_search(&mut self, query: &str) {
        let Some(results) = self.service.search(query).await else {
            return;
        };

        self.results = results;
        self.active_filter = Filter::None;
        self.recent.push(query);
    }

    /// Adopt a passed-forward result set (e.g. re-entering a results
    /// screen), keeping whatever saved flags it carries.
    pub fn adopt(&mut self, results: Vec<Journey>) {
        self.results = results;
        self.active_filter = Filter::None;
    }

    /// Press a filter button: toggles per [`Filter::toggle`].
    pub fn select_filter(&mut self, pressed: Filter) {
        self.active_filter = self.active_filter.toggle(pressed);
    }

    /// Switch the view tab. Always resets the active filter.
    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.active_filter = Filter::None;
    }

    /// Flip the favorite flag on one result by index.
    pub fn toggle_saved(&mut self, index: u32) {
        self.results = toggle_saved(&self.results, index);
    }

    /// The journeys currently visible: the active filter applied to the
    /// result list.
    pub fn visible(&self) -> Vec<Journey> {
        apply_filter(&self.results, self.active_filter)
    }

    /// The unfiltered result list.
    pub fn results(&self) -> &[Journey] {
        &self.results
    }

    /// The active filter.
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The recent-search history.
    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    /// Mutable access to the history (per-item remove, clear-all).
    pub fn recent_mut(&mut self) -> &mut RecentSearches {
        &mut self.recent
    }
}
