//! Docorch CLI - Command-line interface for the document orchestration pipeline.

use clap::Parser;
use docorch_cli::commands;
use docorch_cli::{Cli, Command, Config, Formatter, Pipeline};
use tracing::info_span;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() {
    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> docorch_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(cli.api_key.clone(), cli.model.clone());
    config.validate()?;

    let format = cli
        .output
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let request_id = Uuid::now_v7();
    let span = info_span!("request", id = %request_id);
    let _guard = span.enter();

    let pipeline = Pipeline::new(config);
    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &pipeline, &formatter),
        Command::Text(args) => commands::execute_text(args, &pipeline, &formatter),
        Command::Run(args) => commands::execute_run(args, &pipeline, &formatter),
    }
}
