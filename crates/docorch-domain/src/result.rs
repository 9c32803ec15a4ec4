//! Outcome of one structured-extraction run

use crate::record::{key_fields_to_json, StructuredRecord};
use crate::scalar::KeyFields;
use serde_json::{json, Value};

/// Either a best candidate or a terminal error, never both
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// The record selected from the successful attempt
    Candidate(StructuredRecord),

    /// Every attempt finished without a parseable record
    Failed {
        /// Human-readable reason
        error: String,
    },
}

/// Result of a structured extraction over a whole document
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Candidate or error
    pub outcome: ExtractionOutcome,

    /// Copy of the candidate's key fields (empty on failure)
    pub merged_key_fields: KeyFields,

    /// Number of chunks sent to the model in the last attempt
    pub chunks_considered: usize,

    /// Raw model outputs of the last attempt, one per chunk, for diagnostics
    pub raw_aggregated: Vec<String>,

    /// Attempt that produced the outcome (0 when no model was called)
    pub attempts: u32,
}

impl ExtractionResult {
    /// Successful result; `merged_key_fields` is copied from the candidate
    pub fn success(
        candidate: StructuredRecord,
        chunks_considered: usize,
        raw_aggregated: Vec<String>,
        attempts: u32,
    ) -> Self {
        Self {
            merged_key_fields: candidate.key_fields.clone(),
            outcome: ExtractionOutcome::Candidate(candidate),
            chunks_considered,
            raw_aggregated,
            attempts,
        }
    }

    /// Failed result carrying the last attempt's raw outputs
    pub fn failure(
        error: impl Into<String>,
        chunks_considered: usize,
        raw_aggregated: Vec<String>,
        attempts: u32,
    ) -> Self {
        Self {
            outcome: ExtractionOutcome::Failed {
                error: error.into(),
            },
            merged_key_fields: KeyFields::new(),
            chunks_considered,
            raw_aggregated,
            attempts,
        }
    }

    /// The best candidate, if the run succeeded
    pub fn best_candidate(&self) -> Option<&StructuredRecord> {
        match &self.outcome {
            ExtractionOutcome::Candidate(record) => Some(record),
            ExtractionOutcome::Failed { .. } => None,
        }
    }

    /// The terminal error, if the run failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ExtractionOutcome::Candidate(_) => None,
            ExtractionOutcome::Failed { error } => Some(error),
        }
    }

    /// True when a candidate was found
    pub fn is_success(&self) -> bool {
        self.best_candidate().is_some()
    }

    /// Copy of this result with `transform` applied to every key-field map
    /// (the candidate's and `merged_key_fields`)
    pub fn map_key_fields<F>(&self, transform: F) -> Self
    where
        F: Fn(&KeyFields) -> KeyFields,
    {
        let outcome = match &self.outcome {
            ExtractionOutcome::Candidate(record) => {
                let mut record = record.clone();
                record.key_fields = transform(&record.key_fields);
                ExtractionOutcome::Candidate(record)
            }
            failed => failed.clone(),
        };

        Self {
            outcome,
            merged_key_fields: transform(&self.merged_key_fields),
            chunks_considered: self.chunks_considered,
            raw_aggregated: self.raw_aggregated.clone(),
            attempts: self.attempts,
        }
    }

    /// Render the result in its JSON wire shape
    pub fn to_json(&self) -> Value {
        match &self.outcome {
            ExtractionOutcome::Candidate(record) => json!({
                "best_candidate": record.to_json(),
                "merged_key_fields": key_fields_to_json(&self.merged_key_fields),
                "chunks_considered": self.chunks_considered,
                "raw_aggregated": self.raw_aggregated,
                "attempts": self.attempts,
            }),
            ExtractionOutcome::Failed { error } => json!({
                "error": error,
                "raw_aggregated": self.raw_aggregated,
                "chunks_considered": self.chunks_considered,
                "attempts": self.attempts,
            }),
        }
    }
}
