//! `gradecase list` command - show every test with its weight

use super::dispatch::CommandContext;
use super::render;
use gradecase_core::error::Result;

/// Execute the list command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let suite = ctx.load_suite()?;
    render::print_suite(ctx.cli, ctx.suite_file().path(), &suite, "list")
}
