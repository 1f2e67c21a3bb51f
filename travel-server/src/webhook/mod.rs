//! Search webhook integration.
//!
//! Transport client, raw response DTOs, the static fallback payload, and
//! the conversion into canonical domain journeys.

pub mod client;
pub mod convert;
pub mod error;
pub mod fallback;
pub mod types;

pub use client::{WebhookClient, WebhookConfig};
pub use convert::{shape_results, shape_results_with_saved};
pub use error::WebhookError;
pub use types::RawJourney;
