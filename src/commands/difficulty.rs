//! `gradecase difficulty` command - change a difficulty and recalculate

use super::dispatch::CommandContext;
use super::render;
use crate::cli::commands::DifficultyArgs;
use gradecase_core::error::Result;

/// Execute the difficulty command
pub fn execute(ctx: &CommandContext, args: &DifficultyArgs) -> Result<()> {
    let file = ctx.suite_file();
    let mut suite = ctx.load_suite()?;

    suite.set_difficulty(args.id, args.level)?;
    file.save(&suite)?;

    render::print_suite(ctx.cli, file.path(), &suite, "difficulty")
}
