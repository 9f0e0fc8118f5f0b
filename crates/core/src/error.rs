//! Error types for the fallible edges of the library.
//!
//! The plume equations themselves never fail: degenerate numeric input
//! propagates as IEEE infinities or NaNs. Errors only arise where input has a
//! structural contract (parallel arrays, smoothing windows, scenario files).

use thiserror::Error;

/// Unified error type for `plume-core` operations.
#[derive(Error, Debug)]
pub enum PlumeError {
    /// Parallel input arrays disagree in length
    #[error("Length mismatch: {what} has {found} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Moving-average window of zero
    #[error("Invalid smoothing window: {0} (must be at least 1)")]
    InvalidWindow(usize),

    /// Scenario parameters that would make the plume non-finite or meaningless
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Scenario file could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Scenario file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlumeError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        PlumeError::InvalidConfig(message.into())
    }
}

/// Result type alias for `plume-core` operations.
pub type Result<T> = std::result::Result<T, PlumeError>;
