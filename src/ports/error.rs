//! Error types shared by all store ports.

use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by store implementations.
///
/// Reads distinguish two failure grades. Structural damage (a row with the
/// wrong number of fields) is skipped silently and never surfaces here;
/// semantic damage (a row with the right shape whose fields do not parse)
/// is reported as [`StoreError::Corrupt`] and aborts the read.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A row had the expected shape but its fields failed to parse.
    #[error("corrupt record in {file} at line {line}: {reason}")]
    Corrupt {
        /// Name of the backing file.
        file: String,
        /// One-based line number of the offending row.
        line: usize,
        /// Description of the parse failure.
        reason: String,
    },

    /// The backing file could not be written.
    #[error("could not write {file}: {cause}")]
    Io {
        /// Name of the backing file.
        file: String,
        /// Underlying I/O failure.
        cause: Arc<std::io::Error>,
    },
}

impl StoreError {
    /// Builds a corrupt-record error.
    #[must_use]
    pub fn corrupt(file: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Wraps a write failure.
    #[must_use]
    pub fn io(file: impl Into<String>, cause: std::io::Error) -> Self {
        Self::Io {
            file: file.into(),
            cause: Arc::new(cause),
        }
    }
}
