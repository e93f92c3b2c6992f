//! CLI argument parsing for gradecase
//!
//! Uses clap for argument parsing.
//! Supports global flags: --file, --config, --format, --quiet, --verbose

pub mod commands;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use gradecase_core::format::OutputFormat;
use gradecase_core::store::DEFAULT_SUITE_FILE;
use parse::parse_format;

/// gradecase - author weighted test cases for code-grading backends
#[derive(Parser, Debug)]
#[command(name = "gradecase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suite file holding the tests (backend wire format)
    #[arg(long, short = 'f', global = true, env = "GRADECASE_FILE", default_value = DEFAULT_SUITE_FILE)]
    pub file: PathBuf,

    /// Configuration file (defaults to the gradecase config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
