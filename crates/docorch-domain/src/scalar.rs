//! Scalar values of extracted key fields

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Extracted fields keyed by field name, in the order the model emitted them
pub type KeyFields = IndexMap<String, ScalarValue>;

/// Value of a single extracted field
///
/// The model is asked for simple `key: value` pairs. Anything that is not a
/// string or a number is kept as its compact JSON text, so a field is always
/// one of these three variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Text value (also used for non-scalar JSON the model returned)
    String(String),

    /// Whole number
    Integer(i64),

    /// Decimal number
    Float(f64),
}

impl ScalarValue {
    /// Convert an arbitrary JSON value into a scalar
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => ScalarValue::String(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ScalarValue::Integer(i),
                None => ScalarValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            other => ScalarValue::String(other.to_string()),
        }
    }

    /// Borrow the text of a `String` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// True for the `String` variant
    pub fn is_string(&self) -> bool {
        matches!(self, ScalarValue::String(_))
    }

    /// Convert back into a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            ScalarValue::String(s) => Value::String(s.clone()),
            ScalarValue::Integer(i) => Value::from(*i),
            ScalarValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Integer(i)
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        ScalarValue::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(ScalarValue::from_json(&json!("abc")), ScalarValue::from("abc"));
        assert_eq!(ScalarValue::from_json(&json!(42)), ScalarValue::Integer(42));
        assert_eq!(ScalarValue::from_json(&json!(4.5)), ScalarValue::Float(4.5));
    }

    #[test]
    fn test_from_json_non_scalars_become_text() {
        assert_eq!(ScalarValue::from_json(&json!(true)), ScalarValue::from("true"));
        assert_eq!(ScalarValue::from_json(&json!(null)), ScalarValue::from("null"));
        assert_eq!(
            ScalarValue::from_json(&json!(["a", 1])),
            ScalarValue::from(r#"["a",1]"#)
        );
    }

    #[test]
    fn test_untagged_deserialize() {
        let fields: KeyFields =
            serde_json::from_str(r#"{"name": "Ankita", "count": 3, "ratio": 0.25}"#).unwrap();
        assert_eq!(fields["name"], ScalarValue::from("Ankita"));
        assert_eq!(fields["count"], ScalarValue::Integer(3));
        assert_eq!(fields["ratio"], ScalarValue::Float(0.25));
        // insertion order survives
        let keys: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "count", "ratio"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScalarValue::from("x").to_string(), "x");
        assert_eq!(ScalarValue::Integer(5000).to_string(), "5000");
        assert_eq!(ScalarValue::Float(1234.5).to_string(), "1234.5");
    }
}
