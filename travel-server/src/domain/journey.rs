//! Canonical journey records.
//!
//! A `Journey` is one search result: carrier, schedule, and price. Every
//! backend response variant is shaped into this single format, and the
//! whole list is replaced wholesale on each new search. The only mutation
//! the model supports is the favorite toggle, which is replace-by-index
//! producing a new list.

use super::carrier::Carrier;
use super::duration::parse_duration_minutes;
use super::station::Station;

/// Schedule and pricing details for one journey.
///
/// `departure_time` and `arrival_time` are wall-clock `"HH:MM"` strings
/// taken verbatim from the backend. They are display values and are not
/// validated as a time range; the `duration` string is authoritative when
/// ordering by travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyDetails {
    /// Wall-clock departure time, e.g. `"08:30"`.
    pub departure_time: String,
    /// Wall-clock arrival time.
    pub arrival_time: String,
    /// Boarding stop.
    pub departure_station: Station,
    /// Alighting stop.
    pub arrival_station: Station,
    /// Service number, e.g. `"V60008"`. Absent on some bus records.
    pub train_number: Option<String>,
    /// Free-form duration, e.g. `"2h 20 min"`.
    pub duration: String,
    /// Fare in `currency` units. Non-negative.
    pub price: f64,
    /// Currency code or symbol, e.g. `"DH"`.
    pub currency: String,
    /// Travel date when the backend provides one.
    pub departure_date: Option<String>,
}

/// One canonical search result.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// Carrier operating this journey.
    pub company: Carrier,
    /// Identity within one result set. The join key for filtering and the
    /// favorite toggle; unique per result set, not across searches.
    pub index: u32,
    /// Schedule and pricing.
    pub journey: JourneyDetails,
    /// Client-local favorite flag. Starts `false` on every fresh shape.
    pub is_saved: bool,
}

impl Journey {
    /// Total travel time in minutes, if the duration string parses.
    pub fn duration_minutes(&self) -> Option<u32> {
        parse_duration_minutes(&self.journey.duration)
    }

    /// Whether the record carries a non-empty service number.
    pub fn has_train_number(&self) -> bool {
        self.journey
            .train_number
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Whether this journey counts as a train for filtering purposes.
    ///
    /// True when the carrier is the train operator OR the record carries a
    /// service number. Some bus-operated records still arrive with a
    /// train-number-shaped field and are intentionally kept by the train
    /// filter; do not "fix" this without product sign-off.
    pub fn is_train(&self) -> bool {
        self.company.is_train() || self.has_train_number()
    }
}

/// Flip the favorite flag of the journey with the given index.
///
/// Returns a new list; the input is never mutated. Unknown indices leave
/// every record unchanged.
pub fn toggle_saved(journeys: &[Journey], index: u32) -> Vec<Journey> {
    journeys
        .iter()
        .map(|j| {
            if j.index == index {
                let mut flipped = j.clone();
                flipped.is_saved = !flipped.is_saved;
                flipped
            } else {
                j.clone()
            }
        })
        .collect()
}
