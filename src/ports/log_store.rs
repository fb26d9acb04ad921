//! Append-only port for the status-change audit trail.

use crate::domain::StatusLog;
use crate::ports::StoreResult;

/// Audit trail contract.
///
/// The trail is append-only: entries are never read back, rewritten, or
/// deleted by the tracker.
#[cfg_attr(test, mockall::automock)]
pub trait LogStore: Send + Sync {
    /// Appends one audit entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`](crate::ports::StoreError::Io) when the
    /// entry cannot be written.
    fn save(&self, log: &StatusLog) -> StoreResult<()>;
}
