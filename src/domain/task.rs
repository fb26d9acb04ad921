//! Task aggregate root.

use super::{DomainError, TaskCode, TaskStatus, User};
use serde::{Deserialize, Serialize};

/// A tracked task assigned to a registered user.
///
/// Status changes go through [`Task::transition_to`], which enforces the
/// one-step-ahead progression; there is no way to set an arbitrary status on
/// an existing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    code: TaskCode,
    name: String,
    status: TaskStatus,
    assignee: User,
}

impl Task {
    /// Creates a new task.
    ///
    /// Newly created tasks always start as [`TaskStatus::Unstarted`].
    #[must_use]
    pub fn new(code: TaskCode, name: impl Into<String>, assignee: User) -> Self {
        Self {
            code,
            name: name.into(),
            status: TaskStatus::Unstarted,
            assignee,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn restore(
        code: TaskCode,
        name: impl Into<String>,
        status: TaskStatus,
        assignee: User,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            status,
            assignee,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> TaskCode {
        self.code
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assigned user.
    #[must_use]
    pub const fn assignee(&self) -> &User {
        &self.assignee
    }

    /// Advances the task to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStatusTransition`] unless `target` is
    /// the status directly ahead of the current one. The task is left
    /// unchanged on error.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidStatusTransition {
                code: self.code,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}
