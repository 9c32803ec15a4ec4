//! LLM prompts for structured extraction

use serde_json::{json, Value};

/// Which instruction heads the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// First attempt: describes the record and shows the example
    Standard,
    /// Retry attempts: demands JSON and nothing else
    Strict,
}

impl Instruction {
    /// Full instruction text, worked example included
    pub fn text(&self) -> String {
        let example = example_json();
        match self {
            Instruction::Standard => format!(
                "You are an extractor. Output ONLY valid JSON matching the example exactly. \
                 Identify 5-8 most relevant simple key:value pairs in 'key_fields', include \
                 'summary', 'confidence' (0-1), optionally 'risk_level'. Example:\n{}",
                example
            ),
            Instruction::Strict => format!(
                "OUTPUT ONLY JSON. NOTHING ELSE. Follow the example exactly: {}",
                example
            ),
        }
    }
}

/// The worked example shown to the model
pub fn example_schema() -> Value {
    json!({
        "summary": "short summary",
        "key_fields": {
            "field_1": "value",
            "field_2": "value",
            "field_3": "value"
        },
        "confidence": 0.0,
        "risk_level": "Low"
    })
}

fn example_json() -> String {
    serde_json::to_string_pretty(&example_schema()).unwrap_or_else(|_| example_schema().to_string())
}

/// Builds one prompt per chunk for a fixed instruction and question
pub struct PromptBuilder {
    instruction: String,
    question: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(instruction: Instruction, question: impl Into<String>) -> Self {
        Self {
            instruction: instruction.text(),
            question: question.into(),
        }
    }

    /// Build the prompt for one chunk
    pub fn build(&self, chunk: &str) -> String {
        format!(
            "{}\n\nQUESTION: {}\n\nDOCUMENT_CHUNK:\n{}",
            self.instruction, self.question, chunk
        )
    }
}
