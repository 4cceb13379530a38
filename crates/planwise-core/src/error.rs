//! Core error types for planwise-core.
//!
//! Two small hierarchies built on thiserror: validation failures raised at
//! the task-creation boundary, and configuration failures raised while
//! loading or checking TOML settings. Everything else in the library is
//! infallible by construction (pure derivations over in-memory data).

use std::path::PathBuf;

use thiserror::Error;

use crate::draft::{MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};

/// Rejections produced by the task-creation boundary.
///
/// The store itself never validates; every rule is enforced before a record
/// is assembled (see [`TaskDraft::build`](crate::draft::TaskDraft::build)).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No calendar date was selected.
    #[error("no date selected for the task")]
    MissingDate,

    /// Time-of-day string did not parse as 24-hour `HH:MM`.
    #[error("invalid time of day '{given}': expected HH:MM")]
    InvalidTime { given: String },

    /// Duration outside the accepted range.
    #[error(
        "duration {given} min is outside the allowed range {min}..={max} min",
        min = MIN_DURATION_MINUTES,
        max = MAX_DURATION_MINUTES
    )]
    DurationOutOfRange { given: u32 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for the validation boundary.
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
