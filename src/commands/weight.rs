//! `gradecase weight` command - pin one weight and redistribute the rest

use tracing::debug;

use super::dispatch::CommandContext;
use super::render;
use crate::cli::commands::WeightArgs;
use gradecase_core::error::Result;

/// Execute the weight command
pub fn execute(ctx: &CommandContext, args: &WeightArgs) -> Result<()> {
    let file = ctx.suite_file();
    let mut suite = ctx.load_suite()?;

    suite.set_weight(args.id, args.value)?;
    file.save(&suite)?;

    debug!(
        id = args.id,
        value = args.value,
        total = suite.total_weight(),
        "weight"
    );

    render::print_suite(ctx.cli, file.path(), &suite, "weight")
}
