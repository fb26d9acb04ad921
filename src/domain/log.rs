//! Audit records for task status changes.

use super::{TaskCode, TaskStatus, UserCode};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One entry in the status-change audit trail.
///
/// Every task creation and every successful status change appends exactly
/// one entry. Entries are immutable once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLog {
    /// Code of the task whose status changed.
    pub task_code: TaskCode,
    /// Code of the user who made the change.
    pub changed_by: UserCode,
    /// Status the task was changed to.
    pub status: TaskStatus,
    /// Calendar date of the change.
    pub changed_on: NaiveDate,
}

impl StatusLog {
    /// Creates an entry with an explicit date.
    #[must_use]
    pub const fn new(
        task_code: TaskCode,
        changed_by: UserCode,
        status: TaskStatus,
        changed_on: NaiveDate,
    ) -> Self {
        Self {
            task_code,
            changed_by,
            status,
            changed_on,
        }
    }

    /// Creates an entry dated with the clock's current day.
    #[must_use]
    pub fn record(
        task_code: TaskCode,
        changed_by: UserCode,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Self {
        Self::new(task_code, changed_by, status, clock.utc().date_naive())
    }
}
