//! Webhook client error types.

use std::fmt;

/// Errors from the search webhook HTTP client.
///
/// Callers of the fail-open [`search`](super::client::WebhookClient::search)
/// path never see these; they exist for the strict `fetch` path and for the
/// diagnostic log entries the fail-open path emits.
#[derive(Debug)]
pub enum WebhookError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Webhook returned an error status code
    Api { status: u16, message: String },

    /// Webhook returned an empty or null body
    EmptyBody,
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebhookError::Http(e) => write!(f, "HTTP error: {e}"),
            WebhookError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            WebhookError::Api { status, message } => {
                write!(f, "webhook error {status}: {message}")
            }
            WebhookError::EmptyBody => write!(f, "webhook returned an empty body"),
        }
    }
}

impl std::error::Error for WebhookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebhookError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        WebhookError::Http(err)
    }
}
