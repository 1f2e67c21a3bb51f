//! Domain types for the travel journey search.
//!
//! This module contains the canonical model every backend response variant
//! is shaped into. Types here carry no wire-format concerns; the raw DTOs
//! live in [`crate::webhook::types`].

mod carrier;
mod duration;
mod journey;
mod station;

pub use carrier::{Carrier, TRAIN_CARRIER, UNKNOWN_CARRIER};
pub use duration::parse_duration_minutes;
pub use journey::{Journey, JourneyDetails, toggle_saved};
pub use station::Station;

#[cfg(test)]
pub(crate) use journey::test_support;
