//! Search webhook HTTP client.
//!
//! A single POST round trip against the configured webhook. The public
//! [`WebhookClient::search`] path is fail-open: every failure mode
//! (network error, timeout, non-2xx, empty or unparsable body) degrades to
//! the static fallback payload so callers always have something to render.
//! The failure is logged as a warning and never affects control flow.

use tracing::warn;

use super::error::WebhookError;
use super::fallback;
use super::types::RawJourney;

/// Default webhook endpoint (local workflow-engine instance).
const DEFAULT_ENDPOINT: &str =
    "http://localhost:5678/webhook/843cdf57-fbf1-40ad-bb6f-05e5ed40eb34";

/// Default request timeout in seconds. A timed-out request is a transport
/// failure and falls back like any other.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Request body for the webhook: the free-text query as-is.
#[derive(Debug, serde::Serialize)]
struct SearchMessage<'a> {
    message: &'a str,
}

/// Configuration for the webhook client.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl WebhookConfig {
    /// Create a config with the default endpoint and timeout.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the journey search webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// Fetch raw journey records for a query, fail-open.
    ///
    /// Never returns an error: any [`fetch`](Self::fetch) failure yields
    /// the placeholder payload instead, with a `warn!` carrying the query
    /// and the error detail.
    pub async fn search(&self, query: &str) -> Vec<RawJourney> {
        match self.fetch(query).await {
            Ok(records) => records,
            Err(e) => {
                warn!(query, error = %e, "webhook search failed, serving fallback data");
                fallback::placeholder()
            }
        }
    }

    /// Perform the webhook round trip, surfacing failures.
    ///
    /// POSTs `{"message": "<query>"}` and expects a 2xx response with a
    /// JSON array body in one of the observed raw shapes.
    pub async fn fetch(&self, query: &str) -> Result<Vec<RawJourney>, WebhookError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&SearchMessage { message: query })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        // The workflow engine answers with an empty body when no node ran.
        if body.trim().is_empty() || body == "null" {
            return Err(WebhookError::EmptyBody);
        }

        serde_json::from_str(&body).map_err(|e| WebhookError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
