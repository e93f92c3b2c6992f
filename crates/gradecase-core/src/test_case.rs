//! Test case records and the difficulty multiplier table
//!
//! A test case carries the text the grading backend needs (stdin, expected
//! stdout, an explanation) plus the two numbers the weight engine works
//! with: a difficulty label in `1..=5` and an integer weight in `0..=100`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest valid difficulty label
pub const MIN_DIFFICULTY: u8 = 1;

/// Highest valid difficulty label
pub const MAX_DIFFICULTY: u8 = 5;

/// Difficulty assigned to blank and generated tests that omit one
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// Total weight shared by every test in a suite
pub const WEIGHT_BUDGET: u32 = 100;

/// Multiplier used when a difficulty is absent or outside the table
pub const FALLBACK_MULTIPLIER: f64 = 1.0;

/// A single graded test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// 1-based position in the suite; contiguous across the active set
    pub id: u32,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub explanation: String,
    /// Declared difficulty, `None` when missing or out of range
    #[serde(default)]
    pub difficulty: Option<u8>,
    /// Percentage of the grade carried by this test
    #[serde(default)]
    pub weight: u32,
}

impl TestCase {
    /// Create an unnumbered test case; the suite assigns the id on insert
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Option<u8>,
    ) -> Self {
        Self {
            id: 0,
            input: input.into(),
            output: output.into(),
            explanation: explanation.into(),
            difficulty: difficulty.filter(|d| is_valid_difficulty(*d)),
            weight: 0,
        }
    }

    /// A blank test with the default difficulty
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            ..Self::new("", "", "", Some(DEFAULT_DIFFICULTY))
        }
    }

    /// Builder-style difficulty setter
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty).filter(|d| is_valid_difficulty(*d));
        self
    }

    /// Builder-style weight setter
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Ranking key for the rounding tie-break; undeclared ranks below 1
    pub fn difficulty_rank(&self) -> u8 {
        self.difficulty.unwrap_or(0)
    }
}

/// Whether `difficulty` is a label the multiplier table knows
pub fn is_valid_difficulty(difficulty: u8) -> bool {
    (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty)
}

/// Difficulty → multiplier mapping used to derive raw weights.
///
/// The table is fixed for the lifetime of a process. Only configuration
/// loading builds a non-default one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierTable {
    values: [f64; MAX_DIFFICULTY as usize],
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self {
            values: [0.5, 0.8, 1.0, 1.5, 2.0],
        }
    }
}

impl MultiplierTable {
    /// Build a table from explicit per-difficulty values (index 0 is difficulty 1)
    pub fn from_values(values: [f64; MAX_DIFFICULTY as usize]) -> Self {
        Self { values }
    }

    /// Multiplier for a declared difficulty; absent or unknown labels get 1.0
    pub fn multiplier(&self, difficulty: Option<u8>) -> f64 {
        match difficulty {
            Some(d) if is_valid_difficulty(d) => self.values[usize::from(d - MIN_DIFFICULTY)],
            _ => FALLBACK_MULTIPLIER,
        }
    }

    /// Per-difficulty values, index 0 is difficulty 1
    pub fn values(&self) -> &[f64; MAX_DIFFICULTY as usize] {
        &self.values
    }
}

/// Read a difficulty from loosely-typed JSON.
///
/// Accepts integers, integral floats and numeric strings; anything outside
/// `1..=5` is treated as undeclared.
pub fn difficulty_from_value(value: Option<&Value>) -> Option<u8> {
    let raw = match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    u8::try_from(raw).ok().filter(|d| is_valid_difficulty(*d))
}

/// Read a weight from loosely-typed JSON; negative or non-integer input is 0
pub fn weight_from_value(value: Option<&Value>) -> u32 {
    let raw = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    raw.map(|w| w.clamp(0, i64::from(WEIGHT_BUDGET)) as u32)
        .unwrap_or(0)
}

/// Read a text field; scalars are stringified, null or missing become empty
pub fn text_from_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_multipliers() {
        let table = MultiplierTable::default();
        assert_eq!(table.multiplier(Some(1)), 0.5);
        assert_eq!(table.multiplier(Some(2)), 0.8);
        assert_eq!(table.multiplier(Some(3)), 1.0);
        assert_eq!(table.multiplier(Some(4)), 1.5);
        assert_eq!(table.multiplier(Some(5)), 2.0);
    }

    #[test]
    fn test_unknown_difficulty_falls_back() {
        let table = MultiplierTable::default();
        assert_eq!(table.multiplier(None), 1.0);
        assert_eq!(table.multiplier(Some(0)), 1.0);
        assert_eq!(table.multiplier(Some(9)), 1.0);
    }

    #[test]
    fn test_new_drops_out_of_range_difficulty() {
        let test = TestCase::new("1 2", "3", "adds", Some(7));
        assert_eq!(test.difficulty, None);
        assert_eq!(test.difficulty_rank(), 0);
        assert_eq!(TestCase::blank(2).difficulty, Some(DEFAULT_DIFFICULTY));
    }

    #[test]
    fn test_difficulty_from_loose_json() {
        assert_eq!(difficulty_from_value(Some(&json!(4))), Some(4));
        assert_eq!(difficulty_from_value(Some(&json!(2.0))), Some(2));
        assert_eq!(difficulty_from_value(Some(&json!("5"))), Some(5));
        assert_eq!(difficulty_from_value(Some(&json!(2.5))), None);
        assert_eq!(difficulty_from_value(Some(&json!(6))), None);
        assert_eq!(difficulty_from_value(Some(&json!("hard"))), None);
        assert_eq!(difficulty_from_value(None), None);
    }

    #[test]
    fn test_weight_from_loose_json() {
        assert_eq!(weight_from_value(Some(&json!(40))), 40);
        assert_eq!(weight_from_value(Some(&json!(-5))), 0);
        assert_eq!(weight_from_value(Some(&json!(250))), 100);
        assert_eq!(weight_from_value(Some(&json!(12.5))), 0);
        assert_eq!(weight_from_value(None), 0);
    }

    #[test]
    fn test_text_from_loose_json() {
        assert_eq!(text_from_value(Some(&json!("abc"))), "abc");
        assert_eq!(text_from_value(Some(&json!(42))), "42");
        assert_eq!(text_from_value(Some(&Value::Null)), "");
        assert_eq!(text_from_value(None), "");
    }
}
