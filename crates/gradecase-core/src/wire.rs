//! Grading backend wire format
//!
//! The backend consumes a single JSON object:
//!
//! ```json
//! {
//!   "count": 2,
//!   "1": { "id": 1, "value": 60, "input": "...", "output": "...", "explanation": "...", "difficulty": 4 },
//!   "2": { "id": 2, "value": 40, "input": "...", "output": "...", "explanation": "...", "difficulty": 2 }
//! }
//! ```
//!
//! Keys are 1-based stringified positions and `value` is the integer weight.
//! Decoding normalizes `\r\n` and lone `\r` to `\n` in text fields; encoding
//! writes text unchanged.

use serde_json::{Map, Value};

use crate::error::{GradecaseError, Result};
use crate::test_case::{difficulty_from_value, text_from_value, weight_from_value, TestCase};

/// Key holding the number of tests in the payload
pub const COUNT_KEY: &str = "count";

/// Encode tests as a wire payload, keyed by position
pub fn encode(tests: &[TestCase]) -> Value {
    let mut payload = Map::new();
    payload.insert(COUNT_KEY.to_string(), Value::from(tests.len()));

    for (i, test) in tests.iter().enumerate() {
        let position = i + 1;
        let mut entry = Map::new();
        entry.insert("id".to_string(), Value::from(position));
        entry.insert("value".to_string(), Value::from(test.weight));
        entry.insert("input".to_string(), Value::from(test.input.as_str()));
        entry.insert("output".to_string(), Value::from(test.output.as_str()));
        entry.insert(
            "explanation".to_string(),
            Value::from(test.explanation.as_str()),
        );
        if let Some(difficulty) = test.difficulty {
            entry.insert("difficulty".to_string(), Value::from(difficulty));
        }
        payload.insert(position.to_string(), Value::Object(entry));
    }

    Value::Object(payload)
}

/// Decode a wire payload into tests numbered 1..n.
///
/// Entries are ordered by their numeric key; non-numeric keys other than
/// `count` are ignored. A `count` that disagrees with the entries present
/// is an error.
pub fn decode(payload: &Value) -> Result<Vec<TestCase>> {
    let object = payload
        .as_object()
        .ok_or_else(|| GradecaseError::invalid_wire("expected a JSON object"))?;

    let mut entries: Vec<(u32, &Map<String, Value>)> = Vec::new();
    for (key, value) in object {
        if key == COUNT_KEY {
            continue;
        }
        let Ok(position) = key.parse::<u32>() else {
            continue;
        };
        let entry = value
            .as_object()
            .ok_or_else(|| GradecaseError::invalid_wire(format!("entry {} is not an object", key)))?;
        entries.push((position, entry));
    }
    entries.sort_by_key(|(position, _)| *position);

    if let Some(count) = object.get(COUNT_KEY) {
        let declared = count
            .as_u64()
            .ok_or_else(|| GradecaseError::invalid_wire(format!("count is not a number: {}", count)))?;
        if declared != entries.len() as u64 {
            return Err(GradecaseError::invalid_wire(format!(
                "count is {} but {} entries are present",
                declared,
                entries.len()
            )));
        }
    }

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, (_, entry))| TestCase {
            id: i as u32 + 1,
            input: normalize_newlines(&text_from_value(entry.get("input"))),
            output: normalize_newlines(&text_from_value(entry.get("output"))),
            explanation: normalize_newlines(&text_from_value(entry.get("explanation"))),
            difficulty: difficulty_from_value(entry.get("difficulty")),
            weight: weight_from_value(entry.get("value")),
        })
        .collect())
}

/// Encode tests as pretty-printed wire JSON
pub fn to_string_pretty(tests: &[TestCase]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&encode(tests))?)
}

/// Parse wire JSON text into tests
pub fn from_str(text: &str) -> Result<Vec<TestCase>> {
    let payload: Value = serde_json::from_str(text)?;
    decode(&payload)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<TestCase> {
        vec![
            TestCase {
                id: 1,
                input: "3\n1 2 3\n".into(),
                output: "6".into(),
                explanation: "sums a short list".into(),
                difficulty: Some(4),
                weight: 65,
            },
            TestCase {
                id: 2,
                input: "0\n".into(),
                output: "0".into(),
                explanation: "empty list".into(),
                difficulty: Some(2),
                weight: 35,
            },
        ]
    }

    #[test]
    fn test_encode_shape() {
        let payload = encode(&sample());
        assert_eq!(payload["count"], 2);
        assert_eq!(payload["1"]["id"], 1);
        assert_eq!(payload["1"]["value"], 65);
        assert_eq!(payload["2"]["input"], "0\n");
        assert_eq!(payload["2"]["difficulty"], 2);
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let tests = sample();
        let text = to_string_pretty(&tests).unwrap();
        assert_eq!(from_str(&text).unwrap(), tests);
    }

    #[test]
    fn test_decode_normalizes_line_endings() {
        let payload = json!({
            "count": 1,
            "1": { "id": 1, "value": 100, "input": "a\r\nb\rc", "output": "x\r\n", "explanation": "" }
        });
        let tests = decode(&payload).unwrap();
        assert_eq!(tests[0].input, "a\nb\nc");
        assert_eq!(tests[0].output, "x\n");
    }

    #[test]
    fn test_decode_orders_numerically_and_renumbers() {
        let payload = json!({
            "10": { "input": "ten", "value": 10 },
            "2": { "input": "two", "value": 90 },
            "note": "ignored"
        });
        let tests = decode(&payload).unwrap();
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0].input, "two");
        assert_eq!(tests[0].id, 1);
        assert_eq!(tests[1].input, "ten");
        assert_eq!(tests[1].id, 2);
    }

    #[test]
    fn test_decode_defaults_missing_fields() {
        let payload = json!({ "count": 1, "1": { "difficulty": "nine", "value": -3 } });
        let tests = decode(&payload).unwrap();
        assert_eq!(tests[0].input, "");
        assert_eq!(tests[0].difficulty, None);
        assert_eq!(tests[0].weight, 0);
    }

    #[test]
    fn test_decode_rejects_count_mismatch() {
        let payload = json!({ "count": 3, "1": { "value": 100 } });
        assert!(matches!(
            decode(&payload),
            Err(GradecaseError::InvalidWire { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(matches!(
            decode(&json!([1, 2])),
            Err(GradecaseError::InvalidWire { .. })
        ));
        assert!(matches!(
            decode(&json!({ "1": "text" })),
            Err(GradecaseError::InvalidWire { .. })
        ));
    }

    #[test]
    fn test_empty_suite_encodes_count_only() {
        let payload = encode(&[]);
        assert_eq!(payload, json!({ "count": 0 }));
        assert!(decode(&payload).unwrap().is_empty());
    }
}
