//! `gradecase recalc` command - discard manual weights and re-derive from difficulty

use super::dispatch::CommandContext;
use super::render;
use gradecase_core::error::Result;

/// Execute the recalc command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let file = ctx.suite_file();
    let mut suite = ctx.load_suite()?;

    suite.rebalance();
    file.save(&suite)?;

    render::print_suite(ctx.cli, file.path(), &suite, "recalc")
}
