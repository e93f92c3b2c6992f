//! Suite creation and exchange command argument structures

use clap::Args;
use std::path::PathBuf;

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Number of blank tests (defaults to the configured default_test_count)
    #[arg(long, short)]
    pub count: Option<usize>,

    /// Overwrite an existing suite file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the import command.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Payload to read ('-' for stdin)
    pub path: PathBuf,

    /// Treat the payload as AI generator output (JSON array of tests)
    #[arg(long)]
    pub generated: bool,

    /// Replace the current tests instead of appending
    #[arg(long)]
    pub replace: bool,
}
