//! Conversion from webhook DTOs to canonical journeys.
//!
//! The webhook's two observed response shapes are mapped into the single
//! canonical [`Journey`] record here. Records missing required sub-fields
//! are dropped individually with a logged warning; a partially bad batch
//! still yields the good records.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::domain::{Carrier, Journey, JourneyDetails, Station};

use super::types::{RawJourney, RawJourneyDetails, RawStation};

/// Error describing why a single raw record could not be shaped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShapeError {
    /// A required sub-field was absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Shape a raw response batch into canonical journeys.
///
/// Every shaped record starts with `is_saved = false`. Records missing a
/// required sub-field (`departureStation`, `arrivalStation`, `price`,
/// `duration`) are dropped with a warning, so the output may be shorter
/// than the input.
pub fn shape_results(raw: &[RawJourney]) -> Vec<Journey> {
    shape_results_with_saved(raw, &HashMap::new())
}

/// Shape a raw batch, merging a prior saved-state map by index.
///
/// Used when re-entering a search from a passed-forward result set: the
/// caller supplies `index -> is_saved` from the previous list and matching
/// records keep their flag.
pub fn shape_results_with_saved(
    raw: &[RawJourney],
    saved: &HashMap<u32, bool>,
) -> Vec<Journey> {
    let mut results = Vec::with_capacity(raw.len());

    for (position, record) in raw.iter().enumerate() {
        match shape_journey(record, position) {
            Ok(mut journey) => {
                if let Some(&flag) = saved.get(&journey.index) {
                    journey.is_saved = flag;
                }
                results.push(journey);
            }
            Err(e) => {
                warn!(position, error = %e, "skipping malformed journey record");
            }
        }
    }

    results
}

/// Shape one raw record. `position` is the record's 0-based slot in the
/// batch, used as the last-resort identity.
fn shape_journey(raw: &RawJourney, position: usize) -> Result<Journey, ShapeError> {
    let details = raw
        .journey
        .as_ref()
        .ok_or(ShapeError::MissingField("journey"))?;

    let company = match raw.company.as_deref() {
        Some(id) if !id.trim().is_empty() => Carrier::new(id),
        _ => Carrier::unknown(),
    };

    let index = resolve_index(
        raw.index.as_ref(),
        details.train_number.as_deref(),
        position,
    );

    Ok(Journey {
        company,
        index,
        journey: shape_details(details)?,
        is_saved: false,
    })
}

fn shape_details(raw: &RawJourneyDetails) -> Result<JourneyDetails, ShapeError> {
    let departure_station = raw
        .departure_station
        .as_ref()
        .ok_or(ShapeError::MissingField("departureStation"))?;
    let arrival_station = raw
        .arrival_station
        .as_ref()
        .ok_or(ShapeError::MissingField("arrivalStation"))?;
    let price = raw.price.ok_or(ShapeError::MissingField("price"))?;
    let duration = raw
        .duration
        .clone()
        .ok_or(ShapeError::MissingField("duration"))?;

    // Times are unvalidated display strings; a missing one shapes to "".
    Ok(JourneyDetails {
        departure_time: raw.departure_time.clone().unwrap_or_default(),
        arrival_time: raw.arrival_time.clone().unwrap_or_default(),
        departure_station: shape_station(departure_station),
        arrival_station: shape_station(arrival_station),
        train_number: raw.train_number.clone(),
        duration,
        price,
        currency: raw.currency.clone().unwrap_or_default(),
        departure_date: raw.departure_date.clone(),
    })
}

fn shape_station(raw: &RawStation) -> Station {
    Station::new(
        raw.code.clone().unwrap_or_default(),
        raw.name.clone().unwrap_or_default(),
    )
}

/// Resolve a record's identity.
///
/// Precedence: a numeric wire `index` (number, or a string of digits);
/// then digits embedded in the train number (the backend sometimes sends
/// the train number as the identifier); then the 1-based batch position.
fn resolve_index(raw_index: Option<&Value>, train_number: Option<&str>, position: usize) -> u32 {
    if let Some(value) = raw_index
        && let Some(n) = numeric_index(value)
    {
        return n;
    }

    if let Some(number) = train_number
        && let Some(n) = digits_of(number)
    {
        return n;
    }

    (position as u32) + 1
}

/// Extract a u32 from a JSON number or a string of digits.
fn numeric_index(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Digits embedded in a mixed identifier, e.g. `"V60008"` -> `60008`.
fn digits_of(s: &str) -> Option<u32> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::types::{RawJourney, RawJourneyDetails, RawStation};

    fn raw_station(code: &str, name: &str) -> RawStation {
        RawStation {
            code: Some(code.to_string()),
            name: Some(name.to_string()),
        }
    }

    fn raw_details(price: f64, duration: &str) -> RawJourneyDetails {
        RawJourneyDetails {
            departure_time: Some("08:30".to_string()),
            arrival_time: Some("14:37".to_string()),
            departure_station: Some(raw_station("200", "casa voyageurs")),
            arrival_station: Some(raw_station("303", "tanger ville")),
            train_number: Some("V60008".to_string()),
            duration: Some(duration.to_string()),
            price: Some(price),
            currency: Some("DH".to_string()),
            departure_date: None,
        }
    }

    fn raw_journey(company: Option<&str>, index: Option<Value>, price: f64) -> RawJourney {
        RawJourney {
            company: company.map(str::to_string),
            index,
            journey: Some(raw_details(price, "2h 20 min")),
        }
    }

    /// Rebuild a raw record from a canonical journey, for idempotence tests.
    fn raw_from_canonical(j: &Journey) -> RawJourney {
        RawJourney {
            company: Some(j.company.as_str().to_string()),
            index: Some(serde_json::json!(j.index)),
            journey: Some(RawJourneyDetails {
                departure_time: Some(j.journey.departure_time.clone()),
                arrival_time: Some(j.journey.arrival_time.clone()),
                departure_station: Some(raw_station(
                    &j.journey.departure_station.code,
                    &j.journey.departure_station.name,
                )),
                arrival_station: Some(raw_station(
                    &j.journey.arrival_station.code,
                    &j.journey.arrival_station.name,
                )),
                train_number: j.journey.train_number.clone(),
                duration: Some(j.journey.duration.clone()),
                price: Some(j.journey.price),
                currency: Some(j.journey.currency.clone()),
                departure_date: j.journey.departure_date.clone(),
            }),
        }
    }

    #[test]
    fn shapes_both_carrier_spellings_into_valid_companies() {
        // Batch with the carrier field under both observed keys; exercised
        // through serde so the alias path is covered.
        let json = r#"[
            {"company": "oncf", "index": 1, "journey": {
                "departureTime": "08:30", "arrivalTime": "14:37",
                "departureStation": {"code": "200", "name": "casa voyageurs"},
                "arrivalStation": {"code": "303", "name": "tanger ville"},
                "trainNumber": "V60008", "duration": "6h 7 min",
                "price": 190, "currency": "DH"}},
            {"campany": "ctm", "index": 2, "journey": {
                "departureTime": "09:00", "arrivalTime": "11:20",
                "departureStation": {"code": "201", "name": "casa port"},
                "arrivalStation": {"code": "400", "name": "rabat ville"},
                "duration": "2h 20 min", "price": 75, "currency": "DH"}}
        ]"#;

        let raw: Vec<RawJourney> = serde_json::from_str(json).unwrap();
        let shaped = shape_results(&raw);

        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0].company.as_str(), "oncf");
        assert_eq!(shaped[1].company.as_str(), "ctm");
        assert!(shaped.iter().all(|j| !j.company.is_unknown()));
        assert_eq!(shaped[0].index, 1);
        assert_eq!(shaped[1].index, 2);
    }

    #[test]
    fn missing_carrier_defaults_to_unknown() {
        let shaped = shape_results(&[raw_journey(None, Some(serde_json::json!(1)), 100.0)]);
        assert_eq!(shaped.len(), 1);
        assert!(shaped[0].company.is_unknown());

        let shaped = shape_results(&[raw_journey(Some("  "), Some(serde_json::json!(1)), 100.0)]);
        assert!(shaped[0].company.is_unknown());
    }

    #[test]
    fn index_resolution_precedence() {
        // Numeric wire index wins.
        let shaped = shape_results(&[raw_journey(Some("oncf"), Some(serde_json::json!(7)), 100.0)]);
        assert_eq!(shaped[0].index, 7);

        // Numeric string counts as numeric.
        let shaped =
            shape_results(&[raw_journey(Some("oncf"), Some(serde_json::json!("12")), 100.0)]);
        assert_eq!(shaped[0].index, 12);

        // Train-number stand-in: digits are extracted.
        let shaped = shape_results(&[raw_journey(
            Some("oncf"),
            Some(serde_json::json!("V60008")),
            100.0,
        )]);
        assert_eq!(shaped[0].index, 60008);

        // Absent index, record has a train number: same derivation.
        let shaped = shape_results(&[raw_journey(Some("oncf"), None, 100.0)]);
        assert_eq!(shaped[0].index, 60008);

        // Nothing usable at all: 1-based position.
        let mut record = raw_journey(Some("ctm"), None, 100.0);
        record.journey.as_mut().unwrap().train_number = None;
        let shaped = shape_results(&[record]);
        assert_eq!(shaped[0].index, 1);
    }

    #[test]
    fn records_missing_required_fields_are_dropped() {
        let good = raw_journey(Some("oncf"), Some(serde_json::json!(1)), 190.0);

        let mut no_price = raw_journey(Some("oncf"), Some(serde_json::json!(2)), 0.0);
        no_price.journey.as_mut().unwrap().price = None;

        let mut no_duration = raw_journey(Some("oncf"), Some(serde_json::json!(3)), 80.0);
        no_duration.journey.as_mut().unwrap().duration = None;

        let mut no_station = raw_journey(Some("oncf"), Some(serde_json::json!(4)), 80.0);
        no_station.journey.as_mut().unwrap().arrival_station = None;

        let no_details = RawJourney {
            company: Some("oncf".to_string()),
            index: Some(serde_json::json!(5)),
            journey: None,
        };

        let shaped = shape_results(&[good, no_price, no_duration, no_station, no_details]);

        // Only the good record survives; the batch itself never fails.
        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].index, 1);
    }

    #[test]
    fn missing_times_shape_to_empty_strings() {
        let mut record = raw_journey(Some("oncf"), Some(serde_json::json!(1)), 90.0);
        let details = record.journey.as_mut().unwrap();
        details.departure_time = None;
        details.arrival_time = None;

        let shaped = shape_results(&[record]);
        assert_eq!(shaped[0].journey.departure_time, "");
        assert_eq!(shaped[0].journey.arrival_time, "");
    }

    #[test]
    fn shaping_is_idempotent() {
        let raw = raw_journey(Some("oncf"), Some(serde_json::json!(1)), 190.0);
        let first = shape_results(&[raw]);
        // Feeding the canonical record back through the shaper changes nothing.
        let second = shape_results(&[raw_from_canonical(&first[0])]);
        assert_eq!(first, second);
    }

    #[test]
    fn saved_state_merge_by_index() {
        let raw = vec![
            raw_journey(Some("oncf"), Some(serde_json::json!(1)), 190.0),
            raw_journey(Some("ctm"), Some(serde_json::json!(2)), 75.0),
        ];

        let mut saved = HashMap::new();
        saved.insert(2, true);
        saved.insert(9, true); // stale entry: no matching record

        let shaped = shape_results_with_saved(&raw, &saved);
        assert!(!shaped[0].is_saved);
        assert!(shaped[1].is_saved);
    }

    #[test]
    fn fresh_shape_starts_unsaved() {
        let raw = vec![raw_journey(Some("oncf"), Some(serde_json::json!(1)), 190.0)];
        let shaped = shape_results(&raw);
        assert!(shaped.iter().all(|j| !j.is_saved));
    }
}
