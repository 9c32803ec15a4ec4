//! Blocking HTTP client for the automation webhook

use crate::error::WebhookError;
use crate::payload::{AutomationReply, WebhookPayload};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Transport timeout for one webhook call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Result of one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The workflow accepted the payload and replied
    Delivered(AutomationReply),
    /// Transport failure, bad status or unreadable reply
    Failed {
        /// Human-readable reason
        error: String,
    },
}

impl WebhookOutcome {
    /// The reply, if delivered
    pub fn reply(&self) -> Option<&AutomationReply> {
        match self {
            WebhookOutcome::Delivered(reply) => Some(reply),
            WebhookOutcome::Failed { .. } => None,
        }
    }

    /// Render as the reply object, or `{"error": msg}` on failure
    pub fn to_json(&self) -> Value {
        match self {
            WebhookOutcome::Delivered(reply) => {
                serde_json::to_value(reply).unwrap_or_else(|e| json!({ "error": e.to_string() }))
            }
            WebhookOutcome::Failed { error } => json!({ "error": error }),
        }
    }
}

/// Posts payloads to one webhook URL
pub struct WebhookClient {
    http_client: reqwest::blocking::Client,
    url: String,
    timeout: Duration,
}

impl WebhookClient {
    /// Create a client with the default 60 s timeout
    pub fn new(url: impl Into<String>) -> Result<Self, WebhookError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, WebhookError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WebhookError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.into(),
            timeout,
        })
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Post `payload` and read the workflow's reply
    ///
    /// Never fails: every error is reported as [`WebhookOutcome::Failed`].
    pub fn send(&self, payload: &WebhookPayload) -> WebhookOutcome {
        info!("Posting extraction to webhook ({} chars of text)", payload.document_text.len());
        match self.try_send(payload) {
            Ok(reply) => {
                debug!("Webhook replied with status '{}'", reply.automation_status);
                WebhookOutcome::Delivered(reply)
            }
            Err(e) => {
                warn!("Webhook call failed: {}", e);
                WebhookOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn try_send(&self, payload: &WebhookPayload) -> Result<AutomationReply, WebhookError> {
        let response = self.http_client.post(&self.url).json(payload).send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(WebhookError::Status { status, body });
        }

        let reply: AutomationReply = response.json()?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_outcome_json() {
        let outcome = WebhookOutcome::Failed {
            error: "boom".into(),
        };
        assert_eq!(outcome.to_json(), json!({"error": "boom"}));
        assert!(outcome.reply().is_none());
    }

    #[test]
    fn test_delivered_outcome_json() {
        let outcome = WebhookOutcome::Delivered(AutomationReply {
            final_answer: "42".into(),
            email_body: "Hi".into(),
            automation_status: "sent".into(),
        });
        assert_eq!(
            outcome.to_json(),
            json!({"final_answer": "42", "email_body": "Hi", "automation_status": "sent"})
        );
    }

    #[test]
    fn test_client_keeps_settings() {
        let client = WebhookClient::with_timeout("http://localhost:1/hook", Duration::from_secs(5))
            .unwrap();
        assert_eq!(client.url(), "http://localhost:1/hook");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(WebhookClient::new("x").unwrap().timeout(), DEFAULT_TIMEOUT);
    }
}
