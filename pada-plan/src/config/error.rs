//! Configuration loading errors.

use thiserror::Error;

/// Failure while reading, parsing or validating a planner configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}
