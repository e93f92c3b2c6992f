//! Error types and exit codes for gradecase
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range values)
//! - 3: Data error (missing suite, unknown test id, malformed payload)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing suite, unknown test, malformed payload (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gradecase operations
#[derive(Error, Debug)]
pub enum GradecaseError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("suite is full: at most {max} tests allowed")]
    TooManyTests { max: usize },

    // Data errors (exit code 3)
    #[error("test not found: {id}")]
    TestNotFound { id: u32 },

    #[error("suite file not found: {path:?}")]
    SuiteNotFound { path: PathBuf },

    #[error("suite file already exists: {path:?} (use --force to overwrite)")]
    SuiteExists { path: PathBuf },

    #[error("weights sum to {total}, expected 100")]
    Unbalanced { total: u32 },

    #[error("invalid wire payload: {reason}")]
    InvalidWire { reason: String },

    #[error("no test cases could be recovered from generated payload")]
    InvalidGenerated,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GradecaseError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GradecaseError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GradecaseError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed wire payload
    pub fn invalid_wire(reason: impl Into<String>) -> Self {
        GradecaseError::InvalidWire {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GradecaseError::UnknownFormat(_)
            | GradecaseError::DuplicateFormat
            | GradecaseError::UsageError(_)
            | GradecaseError::InvalidValue { .. }
            | GradecaseError::TooManyTests { .. } => ExitCode::Usage,

            GradecaseError::TestNotFound { .. }
            | GradecaseError::SuiteNotFound { .. }
            | GradecaseError::SuiteExists { .. }
            | GradecaseError::Unbalanced { .. }
            | GradecaseError::InvalidWire { .. }
            | GradecaseError::InvalidGenerated => ExitCode::Data,

            GradecaseError::Io(_)
            | GradecaseError::Json(_)
            | GradecaseError::Toml(_)
            | GradecaseError::FailedOperation { .. }
            | GradecaseError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GradecaseError::UnknownFormat(_) => "unknown_format",
            GradecaseError::DuplicateFormat => "duplicate_format",
            GradecaseError::UsageError(_) => "usage_error",
            GradecaseError::InvalidValue { .. } => "invalid_value",
            GradecaseError::TooManyTests { .. } => "too_many_tests",
            GradecaseError::TestNotFound { .. } => "test_not_found",
            GradecaseError::SuiteNotFound { .. } => "suite_not_found",
            GradecaseError::SuiteExists { .. } => "suite_exists",
            GradecaseError::Unbalanced { .. } => "unbalanced",
            GradecaseError::InvalidWire { .. } => "invalid_wire",
            GradecaseError::InvalidGenerated => "invalid_generated",
            GradecaseError::Io(_) => "io_error",
            GradecaseError::Json(_) => "json_error",
            GradecaseError::Toml(_) => "toml_error",
            GradecaseError::FailedOperation { .. } => "failed_operation",
            GradecaseError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradecase operations
pub type Result<T> = std::result::Result<T, GradecaseError>;
