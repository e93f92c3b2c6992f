//! `gradecase show` command - print one test in full

use super::dispatch::CommandContext;
use super::render;
use gradecase_core::error::Result;

/// Execute the show command
pub fn execute(ctx: &CommandContext, id: u32) -> Result<()> {
    let suite = ctx.load_suite()?;
    let test = suite.get(id)?;
    render::print_test(ctx.cli, test)
}
