//! `gradecase add` command - append a test and recalculate weights

use tracing::debug;

use super::dispatch::CommandContext;
use super::render;
use crate::cli::commands::AddArgs;
use gradecase_core::error::Result;
use gradecase_core::test_case::TestCase;

/// Execute the add command
pub fn execute(ctx: &CommandContext, args: &AddArgs) -> Result<()> {
    let file = ctx.suite_file();
    let mut suite = ctx.load_suite()?;

    let test = TestCase::new(
        args.input.clone(),
        args.output.clone(),
        args.explanation.clone(),
        Some(args.difficulty),
    );
    let id = suite.add(test)?;
    file.save(&suite)?;

    debug!(id, difficulty = args.difficulty, elapsed = ?ctx.start.elapsed(), "add");

    render::print_suite(ctx.cli, file.path(), &suite, "add")
}
