//! `gradecase init` command - create a suite file of blank tests

use tracing::debug;

use super::dispatch::CommandContext;
use super::render;
use crate::cli::commands::InitArgs;
use gradecase_core::error::Result;
use gradecase_core::suite::TestSuite;

/// Execute the init command
pub fn execute(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    let count = args.count.unwrap_or(ctx.config.default_test_count);
    let suite = TestSuite::with_blank_tests(ctx.config.engine()?, ctx.config.limits(), count);

    let file = ctx.suite_file();
    file.create(&suite, args.force)?;

    debug!(
        path = %file.path().display(),
        tests = suite.len(),
        elapsed = ?ctx.start.elapsed(),
        "init"
    );

    render::print_suite(ctx.cli, file.path(), &suite, "init")
}
