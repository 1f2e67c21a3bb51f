//! Result filtering and sorting.
//!
//! Pure derived views over a canonical journey list. The input is never
//! mutated; every call produces a fresh list, so the presentation layer
//! can always fall back to the unfiltered results.

use std::str::FromStr;

use crate::domain::Journey;

/// The active result filter. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// No filtering: results in original order.
    #[default]
    None,
    /// Stable sort, cheapest first.
    Cheapest,
    /// Stable sort, shortest duration first.
    Fastest,
    /// Train journeys only.
    TrainOnly,
    /// Bus journeys only.
    BusOnly,
}

impl Filter {
    /// Apply a filter-button press: pressing the active filter clears it,
    /// pressing any other replaces it.
    #[must_use]
    pub fn toggle(self, pressed: Filter) -> Filter {
        if self == pressed { Filter::None } else { pressed }
    }
}

/// Error returned when parsing an unrecognized filter token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter: {0}")]
pub struct UnknownFilter(String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    /// Parse the filter tokens the presentation layer sends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(Filter::None),
            "cheapest" => Ok(Filter::Cheapest),
            "fast" => Ok(Filter::Fastest),
            "train" => Ok(Filter::TrainOnly),
            "bus" => Ok(Filter::BusOnly),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Derive the filtered/sorted view of a journey list.
///
/// Never mutates the input and never fails:
///
/// - `None` passes the list through in original order;
/// - `Cheapest` and `Fastest` are stable sorts, so equally-priced (or
///   equally-long) journeys keep their input order. A duration that fails
///   to parse sorts as 0 minutes rather than erroring, an inherited quirk
///   that keeps the sort total;
/// - `TrainOnly` keeps journeys operated by the train carrier OR carrying
///   a service number (see [`Journey::is_train`]); `BusOnly` keeps the
///   exact complement, so the two partition the input by index.
pub fn apply_filter(journeys: &[Journey], filter: Filter) -> Vec<Journey> {
    match filter {
        Filter::None => journeys.to_vec(),
        Filter::Cheapest => {
            let mut view = journeys.to_vec();
            view.sort_by(|a, b| a.journey.price.total_cmp(&b.journey.price));
            view
        }
        Filter::Fastest => {
            let mut view = journeys.to_vec();
            view.sort_by_key(|j| j.duration_minutes().unwrap_or(0));
            view
        }
        Filter::TrainOnly => journeys.iter().filter(|j| j.is_train()).cloned().collect(),
        Filter::BusOnly => journeys.iter().filter(|j| !j.is_train()).cloned().collect(),
    }
}
