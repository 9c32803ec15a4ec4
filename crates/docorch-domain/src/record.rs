//! Structured records produced by the language model

use crate::scalar::{KeyFields, ScalarValue};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// One structured answer from the model
///
/// Target schema:
///
/// ```text
/// { "summary": string, "key_fields": { name: scalar, ... },
///   "confidence": number in [0, 1], "risk_level"?: string }
/// ```
///
/// Records are built leniently: any JSON object is accepted, missing fields
/// stay empty, and [`StructuredRecord::schema_issues`] reports the gaps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredRecord {
    /// Short summary of the document
    pub summary: Option<String>,

    /// Extracted `name: value` pairs
    pub key_fields: KeyFields,

    /// Model's self-reported confidence
    pub confidence: Option<f64>,

    /// Free-form risk label (Low / Medium / High), not validated
    pub risk_level: Option<String>,

    /// Top-level keys outside the schema, kept verbatim
    pub extra: Map<String, Value>,
}

/// A deviation from the record schema that did not prevent acceptance
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    /// `summary` absent
    MissingSummary,

    /// `key_fields` absent, empty, or not an object
    MissingKeyFields,

    /// `confidence` absent or not a number
    MissingConfidence,

    /// `confidence` outside [0, 1]
    ConfidenceOutOfRange(f64),
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::MissingSummary => f.write_str("summary is missing"),
            SchemaIssue::MissingKeyFields => f.write_str("key_fields is missing or empty"),
            SchemaIssue::MissingConfidence => f.write_str("confidence is missing"),
            SchemaIssue::ConfidenceOutOfRange(c) => {
                write!(f, "confidence {} out of range [0.0, 1.0]", c)
            }
        }
    }
}

impl StructuredRecord {
    /// Build a record from any JSON object
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut record = StructuredRecord::default();

        for (key, value) in object {
            match key.as_str() {
                "summary" => record.summary = Some(text_of(value)),
                "key_fields" => {
                    if let Some(fields) = value.as_object() {
                        record.key_fields = fields
                            .iter()
                            .map(|(name, v)| (name.clone(), ScalarValue::from_json(v)))
                            .collect();
                    }
                }
                "confidence" => record.confidence = number_of(value),
                "risk_level" => {
                    if !value.is_null() {
                        record.risk_level = Some(text_of(value));
                    }
                }
                _ => {
                    record.extra.insert(key.clone(), value.clone());
                }
            }
        }

        record
    }

    /// Schema gaps of this record (empty when it fully matches)
    pub fn schema_issues(&self) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();
        if self.summary.is_none() {
            issues.push(SchemaIssue::MissingSummary);
        }
        if self.key_fields.is_empty() {
            issues.push(SchemaIssue::MissingKeyFields);
        }
        match self.confidence {
            None => issues.push(SchemaIssue::MissingConfidence),
            Some(c) if !(0.0..=1.0).contains(&c) => {
                issues.push(SchemaIssue::ConfidenceOutOfRange(c))
            }
            Some(_) => {}
        }
        issues
    }

    /// Render the record as a JSON object
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if let Some(summary) = &self.summary {
            object.insert("summary".to_string(), Value::String(summary.clone()));
        }
        object.insert("key_fields".to_string(), key_fields_to_json(&self.key_fields));
        if let Some(confidence) = self.confidence {
            if let Some(n) = serde_json::Number::from_f64(confidence) {
                object.insert("confidence".to_string(), Value::Number(n));
            }
        }
        if let Some(risk) = &self.risk_level {
            object.insert("risk_level".to_string(), Value::String(risk.clone()));
        }
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

/// Render key fields as a JSON object, keeping their order
pub fn key_fields_to_json(fields: &KeyFields) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect(),
    )
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Serialize for StructuredRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StructuredRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        value
            .as_object()
            .map(StructuredRecord::from_json_object)
            .ok_or_else(|| D::Error::custom("structured record must be a JSON object"))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Distinct field names, first occurrence wins
    fn unique(names: Vec<String>) -> Vec<String> {
        let mut seen = Vec::new();
        for name in names {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    proptest! {
        /// Property: key_fields keep the order the model emitted them in
        #[test]
        fn test_key_field_order_survives(names in prop::collection::vec("[A-Za-z_]{1,10}", 0..12)) {
            let names = unique(names);
            let fields: Map<String, Value> = names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), Value::from(i as i64)))
                .collect();
            let mut object = Map::new();
            object.insert("summary".to_string(), Value::from("s"));
            object.insert("key_fields".to_string(), Value::Object(fields));

            let record = StructuredRecord::from_json_object(&object);
            let record_keys: Vec<String> = record.key_fields.keys().cloned().collect();
            prop_assert_eq!(&record_keys, &names);

            let rendered = record.to_json();
            let rendered_keys: Vec<String> = rendered["key_fields"]
                .as_object()
                .map(|o| o.keys().cloned().collect())
                .unwrap_or_default();
            prop_assert_eq!(&rendered_keys, &names);
        }

        /// Property: confidence inside [0, 1] never raises a range issue
        #[test]
        fn test_confidence_in_range_is_clean(c in 0.0f64..=1.0) {
            let mut object = Map::new();
            object.insert("confidence".to_string(), Value::from(c));
            let record = StructuredRecord::from_json_object(&object);
            prop_assert!(!record
                .schema_issues()
                .iter()
                .any(|issue| matches!(issue, SchemaIssue::ConfidenceOutOfRange(_))));
        }
    }
}
