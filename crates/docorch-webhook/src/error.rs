//! Error types for the webhook client

use thiserror::Error;

/// Webhook delivery errors
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Connection error (network, DNS, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The workflow answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The reply was not the expected JSON object
    #[error("Invalid reply: {0}")]
    InvalidReply(String),

    /// Recipient address rejected before sending
    #[error("Invalid recipient email: '{0}'")]
    InvalidRecipient(String),

    /// HTTP client could not be built
    #[error("Client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for WebhookError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            WebhookError::Connection(e.to_string())
        } else if e.is_decode() {
            WebhookError::InvalidReply(e.to_string())
        } else if let Some(status) = e.status() {
            WebhookError::Status {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            WebhookError::Connection(e.to_string())
        }
    }
}
