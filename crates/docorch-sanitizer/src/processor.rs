//! Ordered post-processing pipeline

use crate::config::SanitizerConfig;
use crate::normalize::NumberNormalizer;
use crate::redact::Redactor;
use docorch_domain::{ExtractionResult, KeyFields, StructuredRecord};
use tracing::debug;

/// A pure transform over extracted key fields
pub trait KeyFieldTransform: Send + Sync {
    /// Transformed copy of `fields`; the input is left untouched
    fn apply(&self, fields: &KeyFields) -> KeyFields;
}

/// Transforms applied in order
pub struct PostProcessor {
    transforms: Vec<Box<dyn KeyFieldTransform>>,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::standard()
    }
}

impl PostProcessor {
    /// Empty pipeline
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Redact with the default fragments, then normalize numbers
    ///
    /// Masked values are not numeric, so normalization never undoes a mask.
    pub fn standard() -> Self {
        Self::new()
            .with_transform(Redactor::default())
            .with_transform(NumberNormalizer)
    }

    /// Pipeline described by a configuration
    pub fn from_config(config: &SanitizerConfig) -> Self {
        let mut processor = Self::new();
        if config.redact {
            processor = processor.with_transform(Redactor::new(&config.sensitive_fragments));
        }
        if config.normalize_numbers {
            processor = processor.with_transform(NumberNormalizer);
        }
        processor
    }

    /// Append a transform
    pub fn with_transform(mut self, transform: impl KeyFieldTransform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Number of transforms in the pipeline
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// True for an empty pipeline
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run every transform over `fields`
    pub fn apply(&self, fields: &KeyFields) -> KeyFields {
        self.transforms
            .iter()
            .fold(fields.clone(), |acc, transform| transform.apply(&acc))
    }
}

/// Copy of `record` with its key fields post-processed
pub fn sanitize_record(processor: &PostProcessor, record: &StructuredRecord) -> StructuredRecord {
    let mut out = record.clone();
    out.key_fields = processor.apply(&record.key_fields);
    out
}

/// Copy of `result` with the candidate's and the merged key fields post-processed
pub fn sanitize_result(processor: &PostProcessor, result: &ExtractionResult) -> ExtractionResult {
    debug!("Sanitizing result with {} transform(s)", processor.len());
    result.map_key_fields(|fields| processor.apply(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docorch_domain::ScalarValue;

    fn statement_fields() -> KeyFields {
        let mut fields = KeyFields::new();
        fields.insert("Account_Number".into(), ScalarValue::from("1234567890"));
        fields.insert("Closing_Balance".into(), ScalarValue::from("₹64,252"));
        fields.insert("Branch".into(), ScalarValue::from("N/A"));
        fields
    }

    #[test]
    fn test_standard_redacts_then_normalizes() {
        let out = PostProcessor::standard().apply(&statement_fields());
        assert_eq!(out["Account_Number"], ScalarValue::from("****7890"));
        assert_eq!(out["Closing_Balance"], ScalarValue::Integer(64252));
        assert_eq!(out["Branch"], ScalarValue::from("N/A"));
    }

    #[test]
    fn test_short_numeric_account_is_not_renumbered() {
        let mut fields = KeyFields::new();
        fields.insert("Account".into(), ScalarValue::from("12"));
        let out = PostProcessor::standard().apply(&fields);
        assert_eq!(out["Account"], ScalarValue::from("****"));
    }

    #[test]
    fn test_from_config() {
        assert!(PostProcessor::from_config(&SanitizerConfig::passthrough()).is_empty());
        assert_eq!(PostProcessor::from_config(&SanitizerConfig::default()).len(), 2);

        let config = SanitizerConfig {
            redact: false,
            ..SanitizerConfig::default()
        };
        let out = PostProcessor::from_config(&config).apply(&statement_fields());
        assert_eq!(out["Account_Number"], ScalarValue::Integer(1234567890));
    }

    #[test]
    fn test_sanitize_record_leaves_other_fields() {
        let record = StructuredRecord {
            summary: Some("Statement".into()),
            key_fields: statement_fields(),
            confidence: Some(0.9),
            ..StructuredRecord::default()
        };
        let out = sanitize_record(&PostProcessor::standard(), &record);
        assert_eq!(out.summary, record.summary);
        assert_eq!(out.confidence, record.confidence);
        assert_eq!(record.key_fields["Account_Number"], ScalarValue::from("1234567890"));
    }

    #[test]
    fn test_sanitize_result_covers_merged_fields() {
        let record = StructuredRecord {
            key_fields: statement_fields(),
            ..StructuredRecord::default()
        };
        let result = ExtractionResult::success(record, 1, vec!["raw".into()], 1);

        let out = sanitize_result(&PostProcessor::standard(), &result);

        let masked = ScalarValue::from("****7890");
        assert_eq!(out.merged_key_fields["Account_Number"], masked);
        assert_eq!(out.best_candidate().unwrap().key_fields["Account_Number"], masked);
        assert_eq!(out.raw_aggregated, result.raw_aggregated);
    }

    #[test]
    fn test_sanitize_failed_result_is_unchanged() {
        let result = ExtractionResult::failure("no json", 2, vec!["a".into(), "b".into()], 2);
        assert_eq!(sanitize_result(&PostProcessor::standard(), &result), result);
    }
}
