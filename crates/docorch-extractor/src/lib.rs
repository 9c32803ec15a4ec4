//! Docorch Extractor
//!
//! Turns document text into one structured record using a language model.
//!
//! # Overview
//!
//! Long documents are split into bounded chunks, each chunk is sent to the
//! model with a fixed instruction and worked example, and every answer is
//! parsed leniently as JSON. An attempt succeeds when at least one chunk
//! produced a JSON object; otherwise the whole document is retried with a
//! stricter "JSON only" instruction.
//!
//! # Architecture
//!
//! ```text
//! Text → TextChunker → PromptBuilder → LlmProvider → parser → AggregationStrategy → ExtractionResult
//! ```
//!
//! # Key Features
//!
//! - **Natural chunk boundaries**: cuts at newlines or sentence ends when possible
//! - **Lenient parsing**: direct parse, then the outermost `{...}` in the answer
//! - **Attempt-level retry**: stricter instruction after an attempt without JSON
//! - **Throttling**: configurable pause between model calls, injectable for tests
//! - **Stub mode**: a fixed demonstration record without calling any model
//!
//! # Example Usage
//!
//! ```no_run
//! use docorch_extractor::{ExtractorConfig, StructuredExtractionClient};
//! use docorch_llm::MockProvider;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"summary":"ok","key_fields":{},"confidence":0.9}"#);
//! let client = StructuredExtractionClient::new(llm, ExtractorConfig::default());
//!
//! let result = client.extract("Closing balance 64,252", "What is the balance?")?;
//! println!("{}", result.to_json());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregation;
mod chunking;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod stub;
mod throttle;


pub use aggregation::AggregationStrategy;
pub use chunking::{Chunk, TextChunker, DEFAULT_MAX_CHUNK_CHARS};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{StructuredExtractionClient, EXHAUSTED_ERROR};
pub use parser::{parse_candidate, parse_lenient};
pub use prompt::{example_schema, Instruction, PromptBuilder};
pub use stub::{demonstration_record, demonstration_result};
pub use throttle::{RecordingSleeper, Sleeper, ThreadSleeper, ThrottlePolicy};
