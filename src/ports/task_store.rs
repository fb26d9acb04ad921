//! Port for task persistence and lookup.

use crate::domain::{Task, TaskCode};
use crate::ports::StoreResult;

/// Task persistence contract.
///
/// `save` appends blindly: it does not check for an existing task with the
/// same code. Code uniqueness is a caller-enforced invariant.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore: Send + Sync {
    /// Returns every task whose row decodes and whose assignee resolves,
    /// in file order.
    ///
    /// Tasks whose assignee code matches no registered user are dropped
    /// from the result; the scan continues past them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`](crate::ports::StoreError::Corrupt)
    /// when a row is semantically damaged.
    fn find_all(&self) -> StoreResult<Vec<Task>>;

    /// Finds a task by code, stopping at the first matching row.
    ///
    /// Returns `None` when no row matches or the matching row's assignee
    /// does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`](crate::ports::StoreError::Corrupt)
    /// when a row before or at the match is semantically damaged.
    fn find_by_code(&self, code: TaskCode) -> StoreResult<Option<Task>>;

    /// Appends a new task row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`](crate::ports::StoreError::Io) when the
    /// row cannot be written.
    fn save(&self, task: &Task) -> StoreResult<()>;

    /// Replaces the row whose code matches `task`, leaving every other row
    /// intact.
    ///
    /// The whole table is rewritten atomically. A task code that matches no
    /// row rewrites the table unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`](crate::ports::StoreError::Corrupt)
    /// when an existing row is semantically damaged, or
    /// [`StoreError::Io`](crate::ports::StoreError::Io) when the rewrite
    /// fails.
    fn update(&self, task: &Task) -> StoreResult<()>;
}
