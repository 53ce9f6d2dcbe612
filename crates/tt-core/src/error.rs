//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so validation failures keep their original shape
//! all the way up to the caller.

use thiserror::Error;

/// Validation errors for subject and run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid time format for {subject}: {value:?} (use HH:MM)")]
    InvalidTimeFormat { subject: String, value: String },

    #[error("invalid exam duration {0:?}: expected 1, 2 or 3 hours")]
    InvalidDuration(String),

    #[error("invalid gap day count {got} for {subject}: expected 0..={max}")]
    InvalidGapDays { subject: String, got: u8, max: u8 },

    #[error("invalid session {0:?}: expected Morning or Afternoon")]
    InvalidSession(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
