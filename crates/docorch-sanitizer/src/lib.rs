//! Docorch Sanitizer
//!
//! Post-processing of extracted key fields before they are shown or sent on.
//!
//! The sanitizer provides:
//! - Redaction of sensitive fields such as account numbers
//! - Normalization of numeric strings ("₹5,000" becomes `5000`)
//! - An ordered pipeline applying both to a record or a whole result
//!
//! Every transform works on a copy; inputs are never mutated.
//!
//! # Examples
//!
//! ```
//! use docorch_domain::{KeyFields, ScalarValue};
//! use docorch_sanitizer::PostProcessor;
//!
//! let mut fields = KeyFields::new();
//! fields.insert("Account_Number".into(), ScalarValue::from("1234567890"));
//! fields.insert("Closing_Balance".into(), ScalarValue::from("64,252"));
//!
//! let cleaned = PostProcessor::standard().apply(&fields);
//! assert_eq!(cleaned["Account_Number"], ScalarValue::from("****7890"));
//! assert_eq!(cleaned["Closing_Balance"], ScalarValue::Integer(64252));
//! ```

#![warn(missing_docs)]

mod config;
mod normalize;
mod processor;
mod redact;

pub use config::SanitizerConfig;
pub use normalize::NumberNormalizer;
pub use processor::{sanitize_record, sanitize_result, KeyFieldTransform, PostProcessor};
pub use redact::{Redactor, DEFAULT_SENSITIVE_FRAGMENTS, MASK};
