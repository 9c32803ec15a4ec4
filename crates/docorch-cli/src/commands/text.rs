//! Text command implementation.

use crate::cli::TextArgs;
use crate::error::Result;
use crate::output::{preview, Formatter, TEXT_PREVIEW_CHARS};
use crate::pipeline::{read_document, Pipeline};

/// Execute the text command.
pub fn execute_text(args: TextArgs, pipeline: &Pipeline, formatter: &Formatter) -> Result<()> {
    let document = read_document(&args.document.file, args.document.format.map(Into::into))?;
    let text = pipeline.extract_text(document);

    if text.trim().is_empty() {
        eprintln!("{}", formatter.warning("No text could be extracted from the document"));
        return Ok(());
    }

    if args.full {
        println!("{}", text);
    } else {
        println!("{}", preview(&text, TEXT_PREVIEW_CHARS));
    }
    Ok(())
}
