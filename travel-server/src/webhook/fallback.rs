//! Static fallback payload.
//!
//! Served whenever the live webhook call fails, so the caller always has
//! something to render. The payload is raw-shaped and flows through the
//! same conversion path as live data.

use super::types::{RawJourney, RawJourneyDetails, RawStation};

/// The placeholder journey list returned on any transport failure.
///
/// A fixed single-element list. Substituting plausible data for an error
/// is deliberate (fail-open); replacing it with an explicit "no data"
/// state needs product sign-off.
pub fn placeholder() -> Vec<RawJourney> {
    vec![RawJourney {
        company: Some("oncf".to_string()),
        index: Some(serde_json::json!(1)),
        journey: Some(RawJourneyDetails {
            departure_time: Some("08:30".to_string()),
            arrival_time: Some("14:37".to_string()),
            departure_station: Some(RawStation {
                code: Some("200".to_string()),
                name: Some("casa voyageurs".to_string()),
            }),
            arrival_station: Some(RawStation {
                code: Some("303".to_string()),
                name: Some("tanger ville".to_string()),
            }),
            train_number: Some("V60008".to_string()),
            duration: Some("2h 20 min".to_string()),
            price: Some(210.0),
            currency: Some("DH".to_string()),
            departure_date: None,
        }),
    }]
}
