//! Docorch CLI library.
//!
//! This library provides the core functionality for the `docorch` command-line interface,
//! including configuration management, pipeline wiring, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use cli::{Cli, Command, DEFAULT_QUESTION};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use pipeline::{ModelProvider, Pipeline};
