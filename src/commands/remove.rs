//! `gradecase remove` command - delete a test, renumber and recalculate

use tracing::debug;

use super::dispatch::CommandContext;
use super::render;
use gradecase_core::error::Result;

/// Execute the remove command
pub fn execute(ctx: &CommandContext, id: u32) -> Result<()> {
    let file = ctx.suite_file();
    let mut suite = ctx.load_suite()?;

    let removed = suite.remove(id)?;
    file.save(&suite)?;

    debug!(id, weight = removed.weight, tests = suite.len(), "remove");

    render::print_suite(ctx.cli, file.path(), &suite, "remove")
}
