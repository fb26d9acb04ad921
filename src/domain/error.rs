//! Error types for domain validation and parsing.

use super::{TaskCode, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The user code is not a positive integer.
    #[error("invalid user code {0}, expected a positive integer")]
    InvalidUserCode(u32),

    /// The task code is not a positive integer.
    #[error("invalid task code {0}, expected a positive integer")]
    InvalidTaskCode(u32),

    /// The requested status change skips ahead or moves backwards.
    #[error(
        "task {code} cannot move from '{from}' to '{to}'; \
         only the status one step ahead of the current one may be selected"
    )]
    InvalidStatusTransition {
        /// Code of the task being updated.
        code: TaskCode,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },
}

/// Error returned while parsing status codes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status code: {0}")]
pub struct ParseStatusError(pub u8);
