//! `gradecase import` command - bring tests in from a payload
//!
//! Two sources are accepted: a wire payload (as written by `export`) and the
//! raw text returned by an AI test generator (`--generated`). Generated tests
//! and appended tests always get fresh weights from difficulty. A replacing
//! wire import keeps its weights when they already sum to 100.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use super::dispatch::CommandContext;
use super::render;
use crate::cli::commands::ImportArgs;
use gradecase_core::error::{GradecaseError, Result};
use gradecase_core::generate::parse_generated;
use gradecase_core::suite::TestSuite;
use gradecase_core::test_case::TestCase;
use gradecase_core::weights;
use gradecase_core::wire;

/// Execute the import command
pub fn execute(ctx: &CommandContext, args: &ImportArgs) -> Result<()> {
    let text = read_payload(&args.path)?;
    let limits = ctx.config.limits();

    let records = if args.generated {
        parse_generated(&text, limits.max_test_count)?
    } else {
        wire::from_str(&text)?
    };
    let offered = records.len();

    let file = ctx.suite_file();
    let suite = if args.replace {
        replace_suite(ctx, records)?
    } else {
        let mut suite = ctx.load_suite()?;
        suite.import(records);
        suite
    };

    file.save(&suite)?;

    debug!(
        offered,
        tests = suite.len(),
        generated = args.generated,
        replace = args.replace,
        elapsed = ?ctx.start.elapsed(),
        "import"
    );

    render::print_suite(ctx.cli, file.path(), &suite, "import")
}

fn replace_suite(ctx: &CommandContext, records: Vec<TestCase>) -> Result<TestSuite> {
    let engine = ctx.config.engine()?;
    let limits = ctx.config.limits();

    if !records.is_empty()
        && records.len() <= limits.max_test_count
        && weights::is_balanced(&records)
    {
        return Ok(TestSuite::from_tests(engine, limits, records));
    }

    let mut suite = TestSuite::new(engine, limits);
    suite.import(records);
    Ok(suite)
}

fn read_payload(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| GradecaseError::io_operation("read", "stdin", e))?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|e| GradecaseError::io_operation("read", path.display(), e))
}
