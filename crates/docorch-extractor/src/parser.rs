//! Lenient parsing of model output

use docorch_domain::StructuredRecord;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Greedy match from the first `{` to the last `}`, across lines
static OBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("object pattern is a valid regex"));

/// Parse model output as JSON, tolerating surrounding prose
///
/// The whole string is tried first. If that fails, the outermost
/// `{...}` span is tried. Returns `None` if neither parses.
pub fn parse_lenient(raw: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Some(value);
    }
    let span = OBJECT_PATTERN.find(raw)?;
    serde_json::from_str(span.as_str()).ok()
}

/// Parse model output into a record if it holds a JSON object
///
/// Valid JSON that is not an object (an array, a bare string) gives `None`.
pub fn parse_candidate(raw: &str) -> Option<StructuredRecord> {
    match parse_lenient(raw)? {
        Value::Object(object) => Some(StructuredRecord::from_json_object(&object)),
        _ => None,
    }
}
