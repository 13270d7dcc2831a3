//! Error types for task domain validation and parsing.
//!
//! Parsing a *line* never fails — unrecognised fragments degrade to plain
//! text. These errors only appear on validating constructors for the
//! individual value objects.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The priority letter is not an uppercase ASCII letter.
    #[error("invalid priority '{0}', expected an uppercase letter A-Z")]
    InvalidPriority(char),

    /// The recurrence pattern does not follow `[+]<amount><d|w|m|y>` with
    /// a positive amount.
    #[error("invalid recurrence pattern '{0}', expected [+]<amount><d|w|m|y>")]
    InvalidRecurrence(String),
}
