//! Run command implementation.

use crate::cli::RunArgs;
use crate::commands::extract::ensure_success;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::{read_document, Pipeline};
use docorch_webhook::{validate_recipient, WebhookOutcome};

/// Execute the run command.
pub fn execute_run(args: RunArgs, pipeline: &Pipeline, formatter: &Formatter) -> Result<()> {
    validate_recipient(&args.recipient)?;
    let webhook_url = args
        .webhook_url
        .or_else(|| pipeline.config().webhook.url.clone())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            CliError::Config(
                "Missing webhook URL: set DOCORCH_WEBHOOK_URL or [webhook] url".to_string(),
            )
        })?;

    let document = read_document(&args.document.file, args.document.format.map(Into::into))?;
    let text = pipeline.extract_text(document);

    let result = pipeline.extract(&text, &args.question, args.stub)?;
    ensure_success(&result, formatter)?;
    eprintln!("{}", formatter.success("Structured data extracted"));

    match pipeline.notify(&webhook_url, &text, &result, &args.question, &args.recipient)? {
        WebhookOutcome::Delivered(reply) => {
            println!("{}", formatter.format_reply(&reply)?);
            Ok(())
        }
        WebhookOutcome::Failed { error } => Err(CliError::WebhookFailed(error)),
    }
}
