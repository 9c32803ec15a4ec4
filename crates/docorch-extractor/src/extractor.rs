//! Core Extractor implementation

use crate::chunking::TextChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_candidate;
use crate::prompt::{Instruction, PromptBuilder};
use crate::stub;
use crate::throttle::{Sleeper, ThreadSleeper};
use docorch_domain::traits::LlmProvider;
use docorch_domain::{ExtractionResult, StructuredRecord};
use tracing::{debug, info, warn};

/// Error message of a result whose attempts all came back without JSON
pub const EXHAUSTED_ERROR: &str = "Model did not return valid JSON after retries.";

/// Turns document text into one structured record via an LLM
pub struct StructuredExtractionClient<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExtractorConfig,
    chunker: TextChunker,
    sleeper: Box<dyn Sleeper>,
}

impl<L> StructuredExtractionClient<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new client that sleeps on the real clock
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            chunker: TextChunker::new(config.max_chunk_chars),
            llm_provider,
            config,
            sleeper: Box::new(ThreadSleeper),
        }
    }

    /// Replace the sleeper used for throttling
    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a structured record from `text` in answer to `question`
    ///
    /// Each attempt sends every chunk to the model and keeps the record
    /// chosen by the aggregation strategy. The first attempt that yields a
    /// record wins. A transport failure aborts the run with
    /// [`ExtractorError::Llm`]; output that never parses ends in a failed
    /// [`ExtractionResult`] instead.
    pub fn extract(&self, text: &str, question: &str) -> Result<ExtractionResult, ExtractorError> {
        if self.config.use_stub {
            info!("Stub mode enabled, returning demonstration record");
            return Ok(stub::demonstration_result());
        }
        self.config.validate().map_err(ExtractorError::Config)?;

        let chunks = self.chunker.chunk(text);
        let pieces: Vec<&str> = if chunks.is_empty() {
            vec![text]
        } else {
            chunks.iter().map(|chunk| chunk.text.as_str()).collect()
        };
        let throttle = self.config.throttle();

        info!(
            "Starting extraction with model '{}': {} chars in {} chunk(s), up to {} attempt(s)",
            self.llm_provider.model_name(),
            text.chars().count(),
            pieces.len(),
            self.config.max_attempts
        );

        let mut instruction = Instruction::Standard;
        let mut raw_aggregated = Vec::new();

        for attempt in 1..=self.config.max_attempts {
            let prompts = PromptBuilder::new(instruction, question);
            let mut best: Option<StructuredRecord> = None;
            raw_aggregated = Vec::with_capacity(pieces.len());

            for (idx, piece) in pieces.iter().enumerate() {
                let raw = self
                    .llm_provider
                    .generate(&prompts.build(piece))
                    .map_err(|e| ExtractorError::Llm(e.to_string()))?;

                match parse_candidate(&raw) {
                    Some(record) => {
                        for issue in record.schema_issues() {
                            warn!("Chunk {} (attempt {}): {}", idx + 1, attempt, issue);
                        }
                        best = Some(self.config.aggregation.combine(best.take(), record));
                    }
                    None => debug!(
                        "Chunk {} (attempt {}) returned no JSON object ({} chars)",
                        idx + 1,
                        attempt,
                        raw.len()
                    ),
                }

                raw_aggregated.push(raw);
                throttle.after_call(self.sleeper.as_ref());
            }

            if let Some(candidate) = best {
                info!("Extraction succeeded on attempt {}", attempt);
                return Ok(ExtractionResult::success(
                    candidate,
                    pieces.len(),
                    raw_aggregated,
                    attempt,
                ));
            }

            if attempt < self.config.max_attempts {
                warn!(
                    "Attempt {} produced no JSON record, retrying with strict instruction",
                    attempt
                );
                instruction = Instruction::Strict;
                throttle.before_retry(self.sleeper.as_ref());
            }
        }

        warn!(
            "Extraction failed after {} attempt(s)",
            self.config.max_attempts
        );
        Ok(ExtractionResult::failure(
            EXHAUSTED_ERROR,
            pieces.len(),
            raw_aggregated,
            self.config.max_attempts,
        ))
    }
}
