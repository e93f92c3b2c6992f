//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use gradecase_core::config::Config;
use gradecase_core::error::Result;
use gradecase_core::store::SuiteFile;
use gradecase_core::suite::TestSuite;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Handle to the suite file named by `--file`
    pub fn suite_file(&self) -> SuiteFile {
        SuiteFile::new(&self.cli.file)
    }

    /// Load the suite file
    pub fn load_suite(&self) -> Result<TestSuite> {
        self.suite_file()
            .load(self.config.engine()?, self.config.limits())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("gradecase {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Author weighted test cases for code-grading backends.");
        println!();
        println!("Run `gradecase --help` for usage information.");
        Ok(())
    }
}
