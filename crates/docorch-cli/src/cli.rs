//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use docorch_domain::DocumentFormat;
use std::path::PathBuf;

/// Question asked when none is given.
pub const DEFAULT_QUESTION: &str = "Identify key points and risk_level";

/// Docorch - Turn documents into structured data and hand them to automation.
#[derive(Debug, Parser)]
#[command(name = "docorch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, env = "DOCORCH_MODEL", global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Declared document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// PDF document
    Pdf,
    /// Plain text
    Text,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pdf => DocumentFormat::Pdf,
            FormatArg::Text => DocumentFormat::Text,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract structured data from a document
    Extract(ExtractArgs),

    /// Print the text extracted from a document
    Text(TextArgs),

    /// Extract, then post the result to the automation webhook
    Run(RunArgs),
}

/// The document to read.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Path to a PDF or text file
    pub file: PathBuf,

    /// Document format (inferred from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Analytical question
    #[arg(short, long, default_value = DEFAULT_QUESTION)]
    pub question: String,

    /// Return the demonstration record without calling a model
    #[arg(long)]
    pub stub: bool,

    /// Include the raw model outputs
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the text command.
#[derive(Debug, Args)]
pub struct TextArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Print the whole text instead of a preview
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Email address the workflow should write to
    #[arg(short, long)]
    pub recipient: String,

    /// Analytical question
    #[arg(short, long, default_value = DEFAULT_QUESTION)]
    pub question: String,

    /// Return the demonstration record without calling a model
    #[arg(long)]
    pub stub: bool,

    /// Automation webhook URL
    #[arg(long, env = "DOCORCH_WEBHOOK_URL")]
    pub webhook_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::try_parse_from(["docorch", "extract", "statement.pdf"]).unwrap();
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.document.file, PathBuf::from("statement.pdf"));
                assert_eq!(args.question, DEFAULT_QUESTION);
                assert!(args.document.format.is_none());
                assert!(!args.stub && !args.raw);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_extract_flags() {
        let cli = Cli::try_parse_from([
            "docorch", "extract", "notes", "--format", "text", "--stub", "--raw", "-q", "Why?",
            "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(CliFormat::Json));
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.document.format, Some(FormatArg::Text));
                assert_eq!(args.question, "Why?");
                assert!(args.stub && args.raw);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_recipient() {
        assert!(Cli::try_parse_from(["docorch", "run", "a.pdf"]).is_err());
        let cli = Cli::try_parse_from(["docorch", "run", "a.pdf", "-r", "ops@example.com"]).unwrap();
        assert!(matches!(cli.command, Command::Run(ref args) if args.recipient == "ops@example.com"));
    }

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(DocumentFormat::from(FormatArg::Pdf), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from(FormatArg::Text), DocumentFormat::Text);
    }
}
