//! Suite file persistence
//!
//! A suite is stored on disk in the backend wire format, so the file can be
//! handed to the grader as-is.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SuiteLimits;
use crate::error::{GradecaseError, Result};
use crate::suite::TestSuite;
use crate::weights::WeightEngine;
use crate::wire;

/// Default suite file name, resolved against the working directory
pub const DEFAULT_SUITE_FILE: &str = "tests.json";

/// Handle to a suite file on disk
#[derive(Debug, Clone)]
pub struct SuiteFile {
    path: PathBuf,
}

impl SuiteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a new suite; refuses to overwrite unless `force` is set
    pub fn create(&self, suite: &TestSuite, force: bool) -> Result<()> {
        if self.exists() && !force {
            return Err(GradecaseError::SuiteExists {
                path: self.path.clone(),
            });
        }
        self.save(suite)
    }

    /// Read the suite, keeping stored weights as they are
    pub fn load(&self, engine: WeightEngine, limits: SuiteLimits) -> Result<TestSuite> {
        if !self.exists() {
            return Err(GradecaseError::SuiteNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| GradecaseError::io_operation("read", self.path.display(), e))?;
        let tests = wire::from_str(&content)?;
        debug!(path = %self.path.display(), tests = tests.len(), "loaded suite");

        Ok(TestSuite::from_tests(engine, limits, tests))
    }

    /// Write the suite as pretty-printed wire JSON
    pub fn save(&self, suite: &TestSuite) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| GradecaseError::io_operation("create directory", parent.display(), e))?;
        }

        let mut content = wire::to_string_pretty(suite.tests())?;
        content.push('\n');
        fs::write(&self.path, content)
            .map_err(|e| GradecaseError::io_operation("write", self.path.display(), e))?;

        debug!(path = %self.path.display(), tests = suite.len(), "saved suite");
        Ok(())
    }
}
