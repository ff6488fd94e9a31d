//! Config errors.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule a game config broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("range is empty (min {min} > max {max})")]
    EmptyRange { min: i32, max: i32 },

    #[error("max_attempts must be at least 1")]
    NoAttempts,

    #[error("time_limit_secs must be at least 1")]
    NoTimeLimit,

    #[error("tick_interval must be non-zero")]
    ZeroTickInterval,
}

/// Errors that can occur when building or loading a game config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violation found, not just the first
    #[error("invalid game config: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
