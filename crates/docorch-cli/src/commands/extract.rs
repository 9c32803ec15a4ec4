//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::{read_document, Pipeline};
use docorch_domain::ExtractionResult;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, pipeline: &Pipeline, formatter: &Formatter) -> Result<()> {
    let document = read_document(&args.document.file, args.document.format.map(Into::into))?;
    let text = pipeline.extract_text(document);
    if text.trim().is_empty() {
        eprintln!("{}", formatter.warning("No text could be extracted from the document"));
    }

    let result = pipeline.extract(&text, &args.question, args.stub)?;
    ensure_success(&result, formatter)?;

    println!("{}", formatter.format_result(&result, args.raw)?);
    Ok(())
}

/// Turn a failed extraction into an error, printing raw output previews first.
pub(crate) fn ensure_success(result: &ExtractionResult, formatter: &Formatter) -> Result<()> {
    match result.error() {
        Some(error) => {
            if !result.raw_aggregated.is_empty() {
                eprintln!("Raw model outputs:");
                eprintln!("{}", formatter.raw_previews(&result.raw_aggregated));
            }
            Err(CliError::ExtractionFailed(error.to_string()))
        }
        None => Ok(()),
    }
}
