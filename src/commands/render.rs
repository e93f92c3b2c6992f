//! Shared suite rendering for human, json and records output

use std::path::Path;

use serde_json::json;

use crate::cli::Cli;
use crate::output_by_format_result;
use gradecase_core::error::Result;
use gradecase_core::format::escape_records_value;
use gradecase_core::suite::TestSuite;
use gradecase_core::test_case::TestCase;

/// Longest text preview in the human table
const PREVIEW_CHARS: usize = 32;

/// Print the whole suite after `mode` (list, add, weight, ...)
pub fn print_suite(cli: &Cli, file: &Path, suite: &TestSuite, mode: &str) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "file": file.display().to_string(),
                "count": suite.len(),
                "total": suite.total_weight(),
                "balanced": suite.is_balanced(),
                "tests": suite.tests(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), gradecase_core::error::GradecaseError>(())
        },
        human => {
            if !cli.quiet {
                print_human_table(suite);
            }
        },
        records => {
            println!(
                "H gradecase=1 records=1 mode={} file={} count={} total={}",
                mode,
                file.display(),
                suite.len(),
                suite.total_weight()
            );
            for test in suite.tests() {
                print_test_record(test);
            }
        }
    )
}

/// Print a single test in full
pub fn print_test(cli: &Cli, test: &TestCase) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(test)?);
            Ok::<(), gradecase_core::error::GradecaseError>(())
        },
        human => {
            println!("Test {}", test.id);
            println!("  weight:      {}%", test.weight);
            println!("  difficulty:  {}", difficulty_label(test));
            println!("  explanation: {}", test.explanation);
            println!("  input:");
            print_indented(&test.input);
            println!("  output:");
            print_indented(&test.output);
        },
        records => {
            println!("H gradecase=1 records=1 mode=show id={}", test.id);
            print_test_record(test);
        }
    )
}

fn print_human_table(suite: &TestSuite) {
    if suite.is_empty() {
        println!("No tests.");
        return;
    }

    println!("{:>3}  {:>6}  {:>4}  {:<32}  OUTPUT", "ID", "WEIGHT", "DIFF", "INPUT");
    for test in suite.tests() {
        println!(
            "{:>3}  {:>5}%  {:>4}  {:<32}  {}",
            test.id,
            test.weight,
            difficulty_label(test),
            preview(&test.input),
            preview(&test.output)
        );
    }

    let total = suite.total_weight();
    if suite.is_balanced() {
        println!("total: {}%", total);
    } else {
        println!("total: {}% (unbalanced, run `gradecase recalc`)", total);
    }
}

fn print_test_record(test: &TestCase) {
    println!(
        "T {} weight={} difficulty={} input=\"{}\" output=\"{}\"",
        test.id,
        test.weight,
        difficulty_label(test),
        escape_records_value(&test.input),
        escape_records_value(&test.output)
    );
    if !test.explanation.is_empty() {
        println!("E {} \"{}\"", test.id, escape_records_value(&test.explanation));
    }
}

fn print_indented(text: &str) {
    if text.is_empty() {
        println!("    (empty)");
        return;
    }
    for line in text.lines() {
        println!("    {}", line);
    }
}

fn difficulty_label(test: &TestCase) -> String {
    test.difficulty
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Single-line, length-limited preview of a text field
fn preview(text: &str) -> String {
    let flat = text.trim_end().replace('\n', "\u{21b5}");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(PREVIEW_CHARS - 3).collect();
    cut.push_str("...");
    cut
}
