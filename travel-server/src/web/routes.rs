//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::search::{Filter, apply_filter};
use crate::stay::StaySort;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", post(search_journeys))
        .route("/api/stays", get(search_stays))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search journeys for a free-text query.
///
/// Blank input performs no search and returns an empty, `performed: false`
/// response rather than an error. An unknown filter token is ignored in
/// favor of no filtering; filtering is a presentation concern and must not
/// fail the search.
async fn search_journeys(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let Some(journeys) = state.search.search(&req.message).await else {
        return Json(SearchResponse {
            performed: false,
            journeys: Vec::new(),
        });
    };

    let filter = req
        .filter
        .as_deref()
        .and_then(|token| token.parse::<Filter>().ok())
        .unwrap_or(Filter::None);

    let view = apply_filter(&journeys, filter);

    Json(SearchResponse {
        performed: true,
        journeys: view.iter().map(JourneyResult::from).collect(),
    })
}

/// Search the stay catalog.
async fn search_stays(
    State(state): State<AppState>,
    Query(req): Query<StaySearchRequest>,
) -> Json<StaySearchResponse> {
    let sort = match req.sort.as_deref() {
        Some("rating") => StaySort::Rating,
        _ => StaySort::Price,
    };

    let matches = state.stays.search(req.q.as_deref().unwrap_or(""), sort);

    Json(StaySearchResponse {
        stays: matches.iter().map(StayResult::from).collect(),
    })
}
