//! Combining per-chunk candidates into one record

use docorch_domain::StructuredRecord;
use serde::{Deserialize, Serialize};

/// How the records parsed from each chunk combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationStrategy {
    /// The last chunk that produced a record replaces everything before it
    #[default]
    LastValidWins,
    /// Key fields accumulate across chunks; later values overwrite earlier
    /// ones, and the other fields come from the latest record that has them
    MergeAllChunks,
}

impl AggregationStrategy {
    /// Fold `next` into the record accumulated so far
    pub fn combine(
        &self,
        current: Option<StructuredRecord>,
        next: StructuredRecord,
    ) -> StructuredRecord {
        let Some(mut merged) = current else {
            return next;
        };

        match self {
            AggregationStrategy::LastValidWins => next,
            AggregationStrategy::MergeAllChunks => {
                merged.key_fields.extend(next.key_fields);
                if next.summary.is_some() {
                    merged.summary = next.summary;
                }
                if next.confidence.is_some() {
                    merged.confidence = next.confidence;
                }
                if next.risk_level.is_some() {
                    merged.risk_level = next.risk_level;
                }
                merged.extra.extend(next.extra);
                merged
            }
        }
    }
}
