//! `gradecase export` command - emit the backend payload
//!
//! The payload is always wire JSON regardless of `--format`; the format only
//! affects the confirmation printed when writing to a file.

use std::fs;

use serde_json::json;
use tracing::debug;

use super::dispatch::CommandContext;
use crate::cli::commands::ExportArgs;
use crate::output_by_format_result;
use gradecase_core::error::{GradecaseError, Result};
use gradecase_core::wire;

/// Execute the export command
pub fn execute(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
    let suite = ctx.load_suite()?;
    if !suite.is_balanced() {
        return Err(GradecaseError::Unbalanced {
            total: suite.total_weight(),
        });
    }

    let payload = wire::to_string_pretty(suite.tests())?;

    let Some(out) = &args.out else {
        println!("{}", payload);
        return Ok(());
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| GradecaseError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(out, format!("{}\n", payload))
        .map_err(|e| GradecaseError::io_operation("write", out.display(), e))?;

    debug!(path = %out.display(), tests = suite.len(), "export");

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = json!({
                "exported": suite.len(),
                "out": out.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), GradecaseError>(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Exported {} tests to {}", suite.len(), out.display());
            }
        },
        records => {
            println!(
                "H gradecase=1 records=1 mode=export out={} count={}",
                out.display(),
                suite.len()
            );
        }
    )
}
