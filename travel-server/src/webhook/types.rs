//! Webhook response DTOs.
//!
//! These types map the raw JSON the search webhook returns. The backend has
//! no published schema and its field naming is inconsistent, so every field
//! is optional and quirks are absorbed here rather than in the domain:
//!
//! - the carrier field arrives as either `company` or the misspelling
//!   `campany`, depending on which backend path produced the record;
//! - the `index` field is sometimes a number, sometimes the train number
//!   standing in as a string, sometimes absent.
//!
//! The dual-key carrier acceptance is a compatibility shim for a backend
//! data-quality defect, not a versioning scheme. Do not add further keys
//! without upstream confirmation.

use serde::{Deserialize, Serialize};

/// One raw journey record as returned by the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJourney {
    /// Carrier identifier. Accepts the `campany` misspelling.
    #[serde(alias = "campany", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Record identity. Left untyped because the backend sends numbers,
    /// train-number strings, or nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<serde_json::Value>,

    /// Schedule and pricing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journey: Option<RawJourneyDetails>,
}

/// Schedule and pricing sub-object of a raw record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJourneyDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_station: Option<RawStation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_station: Option<RawStation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_number: Option<String>,

    /// Free-form duration, e.g. `"2h 20 min"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
}

/// A stop reference inside a raw record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
