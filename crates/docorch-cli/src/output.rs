//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docorch_domain::{ExtractionResult, StructuredRecord};
use docorch_webhook::AutomationReply;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Characters shown by the document preview.
pub const TEXT_PREVIEW_CHARS: usize = 3000;

/// Characters shown per raw model output on failure.
pub const RAW_PREVIEW_CHARS: usize = 800;

/// First `limit` characters of `text`, with `...` if anything was cut.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => format!("{}...", &text[..offset]),
        None => text.to_string(),
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a successful extraction.
    pub fn format_result(&self, result: &ExtractionResult, include_raw: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut json = result.to_json();
                if !include_raw {
                    if let Some(object) = json.as_object_mut() {
                        object.remove("raw_aggregated");
                    }
                }
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut out = match result.best_candidate() {
                    Some(record) => self.format_record_table(record),
                    None => self.warning("No structured record"),
                };
                out.push_str(&format!(
                    "\n{}",
                    self.colorize(
                        &format!(
                            "{} chunk(s), attempt {}",
                            result.chunks_considered, result.attempts
                        ),
                        "cyan"
                    )
                ));
                if include_raw {
                    out.push('\n');
                    out.push_str(&self.raw_previews(&result.raw_aggregated));
                }
                Ok(out)
            }
        }
    }

    /// Summary, risk and confidence, then a table of key fields.
    fn format_record_table(&self, record: &StructuredRecord) -> String {
        let mut out = String::new();
        if let Some(summary) = record.summary.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&self.colorize("Quick Summary", "cyan"));
            out.push('\n');
            out.push_str(summary);
            out.push('\n');
        }

        let risk = record.risk_level.as_deref().unwrap_or("None");
        let confidence = record
            .confidence
            .map_or_else(|| "None".to_string(), |c| c.to_string());
        out.push_str(&format!("Risk: {}    Confidence: {}\n", risk, confidence));

        if record.key_fields.is_empty() {
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (name, value) in &record.key_fields {
            builder.push_record([name.clone(), value.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        out.push_str(&table.to_string());
        out
    }

    /// One preview line per raw model output.
    pub fn raw_previews(&self, raw_outputs: &[String]) -> String {
        raw_outputs
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                format!(
                    "chunk {} preview: {}",
                    i + 1,
                    preview(raw, RAW_PREVIEW_CHARS)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the automation reply.
    pub fn format_reply(&self, reply: &AutomationReply) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reply)?),
            OutputFormat::Table => Ok(format!(
                "{}\n{}\n\n{}\n{}\n\n{}\n{}",
                self.colorize("Final Analytical Answer", "cyan"),
                reply.final_answer,
                self.colorize("Generated Email Body", "cyan"),
                reply.email_body,
                self.colorize("Email Automation Status", "cyan"),
                self.info(&reply.automation_status),
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
