//! `gradecase edit` command - replace the text fields of a test
//!
//! Weights are untouched; only difficulty changes move them.

use super::dispatch::CommandContext;
use super::render;
use crate::cli::commands::EditArgs;
use gradecase_core::bail_usage;
use gradecase_core::error::Result;

/// Execute the edit command
pub fn execute(ctx: &CommandContext, args: &EditArgs) -> Result<()> {
    if args.input.is_none() && args.output.is_none() && args.explanation.is_none() {
        bail_usage!("edit needs at least one of --input, --output or --explanation");
    }

    let file = ctx.suite_file();
    let mut suite = ctx.load_suite()?;

    suite.update_text(
        args.id,
        args.input.clone(),
        args.output.clone(),
        args.explanation.clone(),
    )?;
    file.save(&suite)?;

    render::print_test(ctx.cli, suite.get(args.id)?)
}
