//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into one of their variants via `From` or wrap it whole.

use thiserror::Error;

use crate::TimeKind;

/// The error type for `posim-core` validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Start and end times are not of the same kind, or a numeric time is
    /// not a usable number.
    #[error("time type mismatch: start is {start}, end is {end}")]
    TypeMismatch { start: TimeKind, end: TimeKind },

    #[error("invalid time window: {0}")]
    InvalidTimeWindow(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `posim-core`.
pub type CoreResult<T> = Result<T, CoreError>;
