//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Journey;
use crate::stay::Stay;

/// Request body for `POST /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text travel query, e.g. "Casablanca to Rabat".
    pub message: String,

    /// Optional filter token (`cheapest`, `fast`, `train`, `bus`).
    pub filter: Option<String>,
}

/// Response body for `POST /api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Whether a search was actually performed (false for blank input).
    pub performed: bool,

    /// The (possibly filtered) journeys.
    pub journeys: Vec<JourneyResult>,
}

/// One journey in search results.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Carrier identifier, e.g. "oncf".
    pub company: String,

    /// Identity within this result set.
    pub index: u32,

    /// Wall-clock departure time.
    pub departure_time: String,

    /// Wall-clock arrival time.
    pub arrival_time: String,

    /// Boarding stop.
    pub departure_station: StationResult,

    /// Alighting stop.
    pub arrival_station: StationResult,

    /// Service number, when the record carries one.
    pub train_number: Option<String>,

    /// Free-form duration string.
    pub duration: String,

    /// Fare.
    pub price: f64,

    /// Currency code or symbol.
    pub currency: String,

    /// Travel date, when the backend provided one.
    pub departure_date: Option<String>,

    /// Client-local favorite flag.
    pub is_saved: bool,
}

/// A stop in a journey result.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub code: String,
    pub name: String,
}

impl From<&Journey> for JourneyResult {
    fn from(j: &Journey) -> Self {
        Self {
            company: j.company.as_str().to_string(),
            index: j.index,
            departure_time: j.journey.departure_time.clone(),
            arrival_time: j.journey.arrival_time.clone(),
            departure_station: StationResult {
                code: j.journey.departure_station.code.clone(),
                name: j.journey.departure_station.name.clone(),
            },
            arrival_station: StationResult {
                code: j.journey.arrival_station.code.clone(),
                name: j.journey.arrival_station.name.clone(),
            },
            train_number: j.journey.train_number.clone(),
            duration: j.journey.duration.clone(),
            price: j.journey.price,
            currency: j.journey.currency.clone(),
            departure_date: j.journey.departure_date.clone(),
            is_saved: j.is_saved,
        }
    }
}

/// Query parameters for `GET /api/stays`.
#[derive(Debug, Deserialize)]
pub struct StaySearchRequest {
    /// Substring to match on name or location. Empty matches everything.
    pub q: Option<String>,

    /// Sort order: `price` (default) or `rating`.
    pub sort: Option<String>,
}

/// Response body for `GET /api/stays`.
#[derive(Debug, Serialize)]
pub struct StaySearchResponse {
    pub stays: Vec<StayResult>,
}

/// One stay in search results.
#[derive(Debug, Serialize)]
pub struct StayResult {
    pub id: String,
    pub name: String,
    pub location: String,
    pub price: f64,
    pub rating: f64,
}

impl From<&Stay> for StayResult {
    fn from(s: &Stay) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            location: s.location.clone(),
            price: s.price,
            rating: s.rating,
        }
    }
}
