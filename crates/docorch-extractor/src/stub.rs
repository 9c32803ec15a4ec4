//! Fixed demonstration output for offline runs

use docorch_domain::{ExtractionResult, KeyFields, ScalarValue, StructuredRecord};

/// The record returned in stub mode
pub fn demonstration_record() -> StructuredRecord {
    let mut key_fields = KeyFields::new();
    for (key, value) in [
        ("Account_Holder", "Ankita Sharma"),
        ("Statement_Period", "01 Nov 2025 - 30 Nov 2025"),
        ("Total_Credits", "45000"),
        ("Total_Debits", "5000"),
        ("Closing_Balance", "64252"),
    ] {
        key_fields.insert(key.to_string(), ScalarValue::from(value));
    }

    StructuredRecord {
        summary: Some("Demo summary: extracted sample findings.".to_string()),
        key_fields,
        confidence: Some(0.85),
        risk_level: Some("Medium".to_string()),
        ..StructuredRecord::default()
    }
}

/// The full result returned in stub mode; no model was called
pub fn demonstration_result() -> ExtractionResult {
    ExtractionResult::success(demonstration_record(), 1, Vec::new(), 0)
}
