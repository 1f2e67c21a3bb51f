//! Search pipeline: debounced dispatch, filtering, session state.

mod config;
mod dispatch;
mod filter;
mod recent;
mod service;
mod session;

pub use config::SearchConfig;
pub use dispatch::{BackendFailure, Dispatcher, SearchBackend};
pub use filter::{Filter, UnknownFilter, apply_filter};
pub use recent::RecentSearches;
pub use service::SearchService;
pub use session::{SearchSession, Tab};
