//! Import of AI-generated test cases
//!
//! The generator answers with a JSON array of
//! `{ "input", "output", "explanation", "difficulty" }` objects, sometimes
//! wrapped in prose or code fences. Parsing is forgiving: the outermost
//! `[ ... ]` slice is tried first, then individual objects are salvaged
//! with a pattern match. Weights are left at zero; callers recalculate
//! right after importing.

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{GradecaseError, Result};
use crate::test_case::{
    difficulty_from_value, is_valid_difficulty, text_from_value, TestCase, DEFAULT_DIFFICULTY,
};
use crate::wire::normalize_newlines;

/// Parse generator output into at most `limit` tests
pub fn parse_generated(text: &str, limit: usize) -> Result<Vec<TestCase>> {
    let candidate = outer_array(text).unwrap_or(text.trim());

    let mut tests = match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => items.iter().filter_map(record_from_value).collect(),
        Ok(other) => {
            warn!(kind = json_kind(&other), "generated payload is not an array");
            salvage(text)
        }
        Err(e) => {
            debug!(error = %e, "generated payload is not valid JSON, salvaging");
            salvage(text)
        }
    };

    if tests.is_empty() {
        return Err(GradecaseError::InvalidGenerated);
    }
    if tests.len() > limit {
        debug!(parsed = tests.len(), limit, "truncating generated tests");
        tests.truncate(limit);
    }

    for (i, test) in tests.iter_mut().enumerate() {
        test.id = i as u32 + 1;
    }
    Ok(tests)
}

/// Slice between the first `[` and the last `]`, if both exist in order
fn outer_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

fn record_from_value(value: &Value) -> Option<TestCase> {
    let object = value.as_object()?;
    Some(TestCase::new(
        normalize_newlines(&text_from_value(object.get("input"))),
        normalize_newlines(&text_from_value(object.get("output"))),
        normalize_newlines(&text_from_value(object.get("explanation"))),
        Some(difficulty_from_value(object.get("difficulty")).unwrap_or(DEFAULT_DIFFICULTY)),
    ))
}

/// Recover well-formed records from otherwise broken output
fn salvage(text: &str) -> Vec<TestCase> {
    let record_re = match Regex::new(
        r#"\{\s*"input"\s*:\s*"((?:[^"\\]|\\.)*)"\s*,\s*"output"\s*:\s*"((?:[^"\\]|\\.)*)"\s*,\s*"explanation"\s*:\s*"((?:[^"\\]|\\.)*)"\s*,\s*"difficulty"\s*:\s*(\d+)\s*\}"#,
    ) {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile generated record regex");
            return Vec::new();
        }
    };

    let tests: Vec<TestCase> = record_re
        .captures_iter(text)
        .map(|caps| {
            let difficulty = caps[4]
                .parse::<u8>()
                .ok()
                .filter(|d| is_valid_difficulty(*d))
                .unwrap_or(DEFAULT_DIFFICULTY);
            TestCase::new(
                unescape(&caps[1]),
                unescape(&caps[2]),
                unescape(&caps[3]),
                Some(difficulty),
            )
        })
        .collect();

    debug!(recovered = tests.len(), "salvaged generated tests");
    tests
}

/// Decode the JSON escapes of a captured string body; undecodable text is kept raw
fn unescape(raw: &str) -> String {
    match serde_json::from_str::<String>(&format!("\"{}\"", raw)) {
        Ok(text) => normalize_newlines(&text),
        Err(e) => {
            debug!(error = %e, "keeping salvaged text undecoded");
            raw.to_string()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
