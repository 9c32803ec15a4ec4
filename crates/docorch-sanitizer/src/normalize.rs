//! Conversion of numeric strings into numbers

use crate::processor::KeyFieldTransform;
use docorch_domain::{KeyFields, ScalarValue};
use regex::Regex;
use std::sync::LazyLock;

/// Plain integer or decimal, ASCII digits only
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("number pattern is a valid regex"));

/// Characters dropped before matching
const STRIPPED: [char; 3] = [',', '₹', '$'];

/// Turns string fields like `"₹1,234.50"` into numbers
///
/// Non-string fields and strings that are not plain numbers after cleaning
/// are left as they are. Integers too large for `i64` stay strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberNormalizer;

impl NumberNormalizer {
    /// Numeric form of `text`, if it is one
    pub fn parse(text: &str) -> Option<ScalarValue> {
        let cleaned: String = text.chars().filter(|c| !STRIPPED.contains(c)).collect();
        let cleaned = cleaned.trim();
        if !NUMBER_PATTERN.is_match(cleaned) {
            return None;
        }
        if cleaned.contains('.') {
            cleaned.parse::<f64>().ok().map(ScalarValue::Float)
        } else {
            cleaned.parse::<i64>().ok().map(ScalarValue::Integer)
        }
    }
}

impl KeyFieldTransform for NumberNormalizer {
    fn apply(&self, fields: &KeyFields) -> KeyFields {
        fields
            .iter()
            .map(|(name, value)| {
                let normalized = value
                    .as_str()
                    .and_then(Self::parse)
                    .unwrap_or_else(|| value.clone());
                (name.clone(), normalized)
            })
            .collect()
    }
}
