//! Weight allocation engine
//!
//! Assigns every test an integer weight so the suite always sums to
//! [`WEIGHT_BUDGET`]. Two modes:
//!
//! - automatic: [`WeightEngine::recalculate_by_difficulty`] derives all
//!   weights from difficulty multipliers
//! - manual: [`WeightEngine::redistribute_on_manual_change`] pins one test
//!   to a user-chosen weight and spreads the rest over the other tests
//!
//! Each term is rounded independently, so the rounded weights may miss the
//! budget by a few points. The difference is then applied to a single test
//! chosen by difficulty (highest first) and position (earliest first). A
//! deficit larger than that test's weight continues down the same order,
//! so no correction is ever lost to clamping at zero.

use std::time::Instant;

use tracing::debug;

use crate::error::{GradecaseError, Result};
use crate::test_case::{MultiplierTable, TestCase, WEIGHT_BUDGET};
use crate::trace_time;


/// Stateless allocator over caller-owned test collections
#[derive(Debug, Clone, Default)]
pub struct WeightEngine {
    table: MultiplierTable,
}

impl WeightEngine {
    /// Create an engine using the given multiplier table
    pub fn new(table: MultiplierTable) -> Self {
        Self { table }
    }

    /// Raw (unnormalized) weight of a test: its difficulty multiplier
    pub fn raw_weight(&self, test: &TestCase) -> f64 {
        self.table.multiplier(test.difficulty)
    }

    /// Re-derive every weight from difficulty.
    ///
    /// An empty collection is left untouched.
    pub fn recalculate_by_difficulty(&self, tests: &mut [TestCase]) {
        if tests.is_empty() {
            return;
        }
        let start = Instant::now();

        let indices: Vec<usize> = (0..tests.len()).collect();
        self.allocate(tests, &indices, WEIGHT_BUDGET);

        let diff = budget_gap(tests);
        let adjusted = apply_correction(tests, &correction_order(tests, &indices), diff);

        debug!(
            mode = "automatic",
            tests = tests.len(),
            correction = diff,
            adjusted = ?adjusted,
            "recalculate_by_difficulty"
        );
        trace_time!(start, "recalculate_by_difficulty", tests = tests.len());
    }

    /// Pin `changed_id` to `new_weight` and redistribute the remainder.
    ///
    /// `new_weight` is expected in `0..=100`; larger values are treated as
    /// 100. Returns [`GradecaseError::TestNotFound`] without modifying
    /// anything if `changed_id` is not in `tests`.
    pub fn redistribute_on_manual_change(
        &self,
        tests: &mut [TestCase],
        changed_id: u32,
        new_weight: u32,
    ) -> Result<()> {
        if tests.is_empty() {
            return Ok(());
        }
        let start = Instant::now();

        let changed = tests
            .iter()
            .position(|t| t.id == changed_id)
            .ok_or(GradecaseError::TestNotFound { id: changed_id })?;

        let new_weight = new_weight.min(WEIGHT_BUDGET);
        tests[changed].weight = new_weight;

        let others: Vec<usize> = (0..tests.len()).filter(|&i| i != changed).collect();

        if new_weight == WEIGHT_BUDGET {
            for &i in &others {
                tests[i].weight = 0;
            }
            debug!(mode = "manual", changed_id, "saturated");
            return Ok(());
        }

        if others.is_empty() {
            debug!(mode = "manual", changed_id, "nothing to redistribute");
            return Ok(());
        }

        self.allocate(tests, &others, WEIGHT_BUDGET - new_weight);

        let diff = budget_gap(tests);
        let adjusted = apply_correction(tests, &correction_order(tests, &others), diff);

        debug!(
            mode = "manual",
            changed_id,
            new_weight,
            tests = tests.len(),
            correction = diff,
            adjusted = ?adjusted,
            "redistribute_on_manual_change"
        );
        trace_time!(start, "redistribute_on_manual_change", tests = tests.len());
        Ok(())
    }

    /// Split `budget` over the tests at `indices` in proportion to raw weight.
    ///
    /// Falls back to a balanced split when the raw weights sum to zero.
    fn allocate(&self, tests: &mut [TestCase], indices: &[usize], budget: u32) {
        let raw: Vec<f64> = indices.iter().map(|&i| self.raw_weight(&tests[i])).collect();
        let total: f64 = raw.iter().sum();

        if total <= 0.0 {
            let even = balanced_weights(indices.len(), budget);
            for (&i, weight) in indices.iter().zip(even) {
                tests[i].weight = weight;
            }
            return;
        }

        for (&i, raw_weight) in indices.iter().zip(raw) {
            tests[i].weight = proportional_share(raw_weight, total, budget);
        }
    }
}

/// `round(raw / total * budget)`, floored at zero
fn proportional_share(raw: f64, total: f64, budget: u32) -> u32 {
    let share = (raw / total * f64::from(budget)).round();
    if share <= 0.0 {
        0
    } else {
        share as u32
    }
}

/// Points still missing from (positive) or exceeding (negative) the budget
fn budget_gap(tests: &[TestCase]) -> i64 {
    i64::from(WEIGHT_BUDGET) - i64::from(total_weight(tests))
}

/// Order `indices` for the rounding correction: difficulty descending,
/// then collection position ascending.
fn correction_order(tests: &[TestCase], indices: &[usize]) -> Vec<usize> {
    let mut order = indices.to_vec();
    order.sort_by(|&a, &b| {
        tests[b]
            .difficulty_rank()
            .cmp(&tests[a].difficulty_rank())
            .then(a.cmp(&b))
    });
    order
}

/// Apply `diff` along `order`; returns the ids that were adjusted.
fn apply_correction(tests: &mut [TestCase], order: &[usize], diff: i64) -> Vec<u32> {
    let mut adjusted = Vec::new();

    if diff > 0 {
        if let Some(&first) = order.first() {
            tests[first].weight += diff as u32;
            adjusted.push(tests[first].id);
        }
        return adjusted;
    }

    let mut deficit = diff.unsigned_abs();
    for &i in order {
        if deficit == 0 {
            break;
        }
        let take = u64::from(tests[i].weight).min(deficit);
        if take > 0 {
            tests[i].weight -= take as u32;
            deficit -= take;
            adjusted.push(tests[i].id);
        }
    }
    adjusted
}

/// Sum of all weights
pub fn total_weight(tests: &[TestCase]) -> u32 {
    tests.iter().map(|t| t.weight).sum()
}

/// Whether the collection satisfies the sum-to-budget invariant.
///
/// An empty collection is trivially balanced.
pub fn is_balanced(tests: &[TestCase]) -> bool {
    tests.is_empty() || total_weight(tests) == WEIGHT_BUDGET
}

/// Split `budget` over `count` slots as evenly as integer division allows.
///
/// The first `budget % count` slots receive one extra point.
pub fn balanced_weights(count: usize, budget: u32) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }
    let slots = count as u32;
    let base = budget / slots;
    let remainder = (budget % slots) as usize;

    (0..count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}
