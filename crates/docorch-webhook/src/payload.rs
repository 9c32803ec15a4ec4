//! Wire types exchanged with the automation workflow

use crate::error::WebhookError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body posted to the workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Full extracted document text
    pub document_text: String,
    /// Sanitized extraction result
    pub extracted_json: Value,
    /// The user's question
    pub question: String,
    /// Where the workflow should send its email
    pub recipient_email: String,
}

/// What the workflow answers with
///
/// Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationReply {
    /// Answer to the question
    pub final_answer: String,
    /// Drafted email text
    pub email_body: String,
    /// Workflow-reported status
    pub automation_status: String,
}

/// Reject recipient addresses that are empty or lack an `@`
pub fn validate_recipient(email: &str) -> Result<(), WebhookError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(WebhookError::InvalidRecipient(email.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_field_names() {
        let payload = WebhookPayload {
            document_text: "text".into(),
            extracted_json: json!({"a": 1}),
            question: "q".into(),
            recipient_email: "a@b.c".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "document_text": "text",
                "extracted_json": {"a": 1},
                "question": "q",
                "recipient_email": "a@b.c"
            })
        );
    }

    #[test]
    fn test_reply_missing_fields_default_to_empty() {
        let reply: AutomationReply = serde_json::from_str(r#"{"final_answer": "done"}"#).unwrap();
        assert_eq!(reply.final_answer, "done");
        assert_eq!(reply.email_body, "");
        assert_eq!(reply.automation_status, "");
    }

    #[test]
    fn test_validate_recipient() {
        assert!(validate_recipient("ops@example.com").is_ok());
        assert!(validate_recipient("").is_err());
        assert!(validate_recipient("   ").is_err());
        assert!(matches!(
            validate_recipient("not-an-email"),
            Err(WebhookError::InvalidRecipient(_))
        ));
    }
}
