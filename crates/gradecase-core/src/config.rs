//! Configuration for gradecase
//!
//! Read from `config.toml` in the gradecase config directory, or from an
//! explicit path. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{GradecaseError, Result};
use crate::test_case::{MultiplierTable, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::weights::WeightEngine;

pub use types::{Config, SuiteLimits, DEFAULT_TEST_COUNT, MAX_TEST_COUNT};

const CONFIG_DIR: &str = "gradecase";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRADECASE_CONFIG_DIR";

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GradecaseError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `explicit` if given, else from the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GradecaseError::io_operation("read config", path.display(), e))?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and multiplier overrides
    pub fn validate(&self) -> Result<()> {
        if self.max_test_count == 0 {
            bail_invalid!("max_test_count", self.max_test_count);
        }
        if self.default_test_count == 0 || self.default_test_count > self.max_test_count {
            bail_invalid!(
                "default_test_count",
                format!(
                    "{} (must be between 1 and {})",
                    self.default_test_count, self.max_test_count
                )
            );
        }
        self.multiplier_table().map(|_| ())
    }

    /// Build the multiplier table, applying overrides on top of the defaults
    pub fn multiplier_table(&self) -> Result<MultiplierTable> {
        let mut values = *MultiplierTable::default().values();

        for (key, &value) in &self.multipliers {
            let difficulty = key
                .parse::<u8>()
                .ok()
                .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
                .ok_or_else(|| GradecaseError::invalid_value("multiplier difficulty", key))?;
            if !value.is_finite() || value < 0.0 {
                bail_invalid!("multiplier", format!("{} = {}", key, value));
            }
            values[usize::from(difficulty - MIN_DIFFICULTY)] = value;
        }

        Ok(MultiplierTable::from_values(values))
    }

    /// Weight engine configured with this multiplier table
    pub fn engine(&self) -> Result<WeightEngine> {
        Ok(WeightEngine::new(self.multiplier_table()?))
    }

    /// Suite capacity limits
    pub fn limits(&self) -> SuiteLimits {
        SuiteLimits {
            default_test_count: self.default_test_count,
            max_test_count: self.max_test_count,
        }
    }
}
