//! Docorch Webhook
//!
//! Hands an extraction off to an external automation workflow over HTTP.
//!
//! The workflow receives the document text, the sanitized extraction and the
//! user's question, and answers with a final answer and a drafted email.
//! Delivery problems never surface as errors: [`WebhookClient::send`]
//! always returns a [`WebhookOutcome`], failures included.
//!
//! # Examples
//!
//! ```no_run
//! use docorch_webhook::{validate_recipient, WebhookClient, WebhookPayload};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! validate_recipient("ops@example.com")?;
//! let client = WebhookClient::new("http://localhost:5678/webhook/docs")?;
//! let payload = WebhookPayload {
//!     document_text: "Closing balance 64,252".into(),
//!     extracted_json: json!({"best_candidate": {}}),
//!     question: "Summarize".into(),
//!     recipient_email: "ops@example.com".into(),
//! };
//! println!("{}", client.send(&payload).to_json());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod payload;

pub use client::{WebhookClient, WebhookOutcome, DEFAULT_TIMEOUT};
pub use error::WebhookError;
pub use payload::{validate_recipient, AutomationReply, WebhookPayload};
