//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tests created by `init` when no count is given
pub const DEFAULT_TEST_COUNT: usize = 3;

/// Largest suite the store accepts
pub const MAX_TEST_COUNT: usize = 30;

/// gradecase configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of blank tests in a freshly initialized suite
    #[serde(default = "default_test_count")]
    pub default_test_count: usize,

    /// Upper bound on tests in a suite
    #[serde(default = "default_max_test_count")]
    pub max_test_count: usize,

    /// Per-difficulty multiplier overrides, keyed by difficulty label
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub multipliers: BTreeMap<String, f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_test_count: default_test_count(),
            max_test_count: default_max_test_count(),
            multipliers: BTreeMap::new(),
        }
    }
}

fn default_test_count() -> usize {
    DEFAULT_TEST_COUNT
}

fn default_max_test_count() -> usize {
    MAX_TEST_COUNT
}

/// Capacity limits handed to the suite store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteLimits {
    pub default_test_count: usize,
    pub max_test_count: usize,
}

impl Default for SuiteLimits {
    fn default() -> Self {
        Self {
            default_test_count: DEFAULT_TEST_COUNT,
            max_test_count: MAX_TEST_COUNT,
        }
    }
}
