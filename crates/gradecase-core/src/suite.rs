//! In-memory test suite
//!
//! The suite owns the authoritative list of test cases and calls the weight
//! engine after every change that could break the sum-to-100 invariant.
//! Ids are kept 1-based and contiguous: removing a test renumbers the ones
//! after it.

use tracing::{debug, warn};

use crate::bail_invalid;
use crate::config::SuiteLimits;
use crate::error::{GradecaseError, Result};
use crate::test_case::{is_valid_difficulty, TestCase, MAX_DIFFICULTY, MIN_DIFFICULTY, WEIGHT_BUDGET};
use crate::weights::{self, WeightEngine};

/// Caller-side collection of test cases
#[derive(Debug, Clone)]
pub struct TestSuite {
    tests: Vec<TestCase>,
    engine: WeightEngine,
    limits: SuiteLimits,
}

impl TestSuite {
    /// Create an empty suite
    pub fn new(engine: WeightEngine, limits: SuiteLimits) -> Self {
        Self {
            tests: Vec::new(),
            engine,
            limits,
        }
    }

    /// Create a suite of `count` blank tests (clamped to the capacity)
    pub fn with_blank_tests(engine: WeightEngine, limits: SuiteLimits, count: usize) -> Self {
        let count = count.clamp(1, limits.max_test_count.max(1));
        let mut suite = Self::new(engine, limits);
        suite.tests = (1..=count as u32).map(TestCase::blank).collect();
        suite.rebalance();
        suite
    }

    /// Wrap an existing collection, e.g. one decoded from a suite file.
    ///
    /// Ids are renumbered; weights are kept as given. A collection larger
    /// than the capacity is kept whole so it can still be shrunk; only
    /// `add` and `import` enforce the limit.
    pub fn from_tests(engine: WeightEngine, limits: SuiteLimits, tests: Vec<TestCase>) -> Self {
        if tests.len() > limits.max_test_count {
            warn!(
                tests = tests.len(),
                max = limits.max_test_count,
                "suite exceeds configured capacity"
            );
        }
        let mut suite = Self::new(engine, limits);
        suite.tests = tests;
        suite.renumber();
        suite
    }

    /// All tests in id order
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn limits(&self) -> SuiteLimits {
        self.limits
    }

    /// Look up a test by id
    pub fn get(&self, id: u32) -> Result<&TestCase> {
        self.tests
            .iter()
            .find(|t| t.id == id)
            .ok_or(GradecaseError::TestNotFound { id })
    }

    fn index_of(&self, id: u32) -> Result<usize> {
        self.tests
            .iter()
            .position(|t| t.id == id)
            .ok_or(GradecaseError::TestNotFound { id })
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u32 {
        weights::total_weight(&self.tests)
    }

    /// Whether the weights currently sum to 100
    pub fn is_balanced(&self) -> bool {
        weights::is_balanced(&self.tests)
    }

    /// Append a test and recalculate; returns the new id
    pub fn add(&mut self, test: TestCase) -> Result<u32> {
        if self.tests.len() >= self.limits.max_test_count {
            return Err(GradecaseError::TooManyTests {
                max: self.limits.max_test_count,
            });
        }

        let id = self.tests.len() as u32 + 1;
        self.tests.push(TestCase {
            id,
            weight: 0,
            ..test
        });
        self.rebalance();

        debug!(id, tests = self.tests.len(), "added test");
        Ok(id)
    }

    /// Remove a test, renumber the rest and recalculate
    pub fn remove(&mut self, id: u32) -> Result<TestCase> {
        let index = self.index_of(id)?;
        let removed = self.tests.remove(index);
        self.renumber();
        self.rebalance();

        debug!(id, tests = self.tests.len(), "removed test");
        Ok(removed)
    }

    /// Change a test's difficulty and recalculate
    pub fn set_difficulty(&mut self, id: u32, difficulty: u8) -> Result<()> {
        if !is_valid_difficulty(difficulty) {
            bail_invalid!(
                "difficulty",
                format!(
                    "{} (expected {}-{})",
                    difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
                )
            );
        }
        let index = self.index_of(id)?;
        self.tests[index].difficulty = Some(difficulty);
        self.rebalance();
        Ok(())
    }

    /// Set a test's weight by hand and redistribute the others.
    ///
    /// `value` is clamped to `0..=100`. A lone test always holds the full
    /// budget.
    pub fn set_weight(&mut self, id: u32, value: i64) -> Result<()> {
        let index = self.index_of(id)?;
        let clamped = value.clamp(0, i64::from(WEIGHT_BUDGET)) as u32;
        if i64::from(clamped) != value {
            debug!(id, requested = value, clamped, "clamped manual weight");
        }

        if self.tests.len() == 1 {
            self.tests[index].weight = WEIGHT_BUDGET;
            return Ok(());
        }

        self.engine
            .redistribute_on_manual_change(&mut self.tests, id, clamped)
    }

    /// Replace the text fields of a test; `None` leaves a field unchanged
    pub fn update_text(
        &mut self,
        id: u32,
        input: Option<String>,
        output: Option<String>,
        explanation: Option<String>,
    ) -> Result<()> {
        let index = self.index_of(id)?;
        let test = &mut self.tests[index];
        if let Some(input) = input {
            test.input = input;
        }
        if let Some(output) = output {
            test.output = output;
        }
        if let Some(explanation) = explanation {
            test.explanation = explanation;
        }
        Ok(())
    }

    /// Append externally generated tests, then recalculate.
    ///
    /// Records beyond the remaining capacity are dropped. Returns the number
    /// of records actually imported.
    pub fn import(&mut self, records: Vec<TestCase>) -> usize {
        let capacity = self.limits.max_test_count.saturating_sub(self.tests.len());
        if records.len() > capacity {
            warn!(
                offered = records.len(),
                capacity, "suite capacity reached, dropping extra tests"
            );
        }

        let imported = records.len().min(capacity);
        self.tests.extend(records.into_iter().take(imported));
        self.renumber();
        self.rebalance();

        debug!(imported, tests = self.tests.len(), "imported tests");
        imported
    }

    /// Re-derive every weight from difficulty
    pub fn rebalance(&mut self) {
        self.engine.recalculate_by_difficulty(&mut self.tests);
    }

    fn renumber(&mut self) {
        for (i, test) in self.tests.iter_mut().enumerate() {
            test.id = i as u32 + 1;
        }
    }
}
