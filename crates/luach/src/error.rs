//! Error types for luach operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LuachError {
    /// Caller-supplied value outside its valid range (month, year, coordinates).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    /// A per-date computation (sunset) could not be carried out.
    /// Renderers recover from this by omitting the affected annotation.
    #[error("Computation failure: {0}")]
    ComputationFailure(String),

    /// An internal contract was broken. Not recoverable by the caller.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, LuachError>;
