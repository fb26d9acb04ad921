//! Orchestration service for task listing, registration, and status changes.

use crate::domain::{DomainError, StatusLog, Task, TaskCode, TaskStatus, User, UserCode};
use crate::ports::{LogStore, StoreError, TaskStore, UserDirectory};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Label shown in listings when the viewing user is the assignee.
const SELF_LABEL: &str = "you";

/// Presentation row for the task listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOverview {
    /// Task code.
    pub code: TaskCode,
    /// Task name.
    pub name: String,
    /// The assignee's display name, or `"you"` for the viewer's own tasks.
    pub assignee_label: String,
    /// Human-readable status label.
    pub status_label: &'static str,
}

/// Service-level errors for tracker operations.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// No task carries the requested code.
    #[error("task {0} does not exist; enter an existing task code")]
    TaskNotFound(TaskCode),
    /// The requested assignee matches no registered user.
    #[error("user {0} does not exist; enter an existing user code")]
    UnknownAssignee(UserCode),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for tracker service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Tracker orchestration service.
///
/// All mutating operations persist the task change before appending the
/// audit entry, so a rejected or failed change never leaves a stray entry
/// in the trail.
#[derive(Clone)]
pub struct TrackerService<T, L, U, C>
where
    T: TaskStore,
    L: LogStore,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    logs: Arc<L>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, L, U, C> TrackerService<T, L, U, C>
where
    T: TaskStore,
    L: LogStore,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new tracker service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, logs: Arc<L>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            logs,
            users,
            clock,
        }
    }

    /// Lists every stored task as a presentation row for `viewer`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Store`] when the task table cannot be read.
    pub fn list_all(&self, viewer: &User) -> TrackerResult<Vec<TaskOverview>> {
        let tasks = self.tasks.find_all()?;
        Ok(tasks.iter().map(|task| overview(task, viewer)).collect())
    }

    /// Registers a new task assigned to `assignee_code` and records the
    /// creation in the audit trail, attributed to `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownAssignee`] when `assignee_code`
    /// matches no registered user, or [`TrackerError::Store`] when either
    /// write fails.
    pub fn create(
        &self,
        code: TaskCode,
        name: impl Into<String>,
        assignee_code: UserCode,
        actor: &User,
    ) -> TrackerResult<Task> {
        let assignee = self
            .users
            .find_by_code(assignee_code)?
            .ok_or_else(|| TrackerError::UnknownAssignee(assignee_code))?;
        let task = Task::new(code, name, assignee);
        self.tasks.save(&task)?;
        let entry = StatusLog::record(task.code(), actor.code, task.status(), &*self.clock);
        self.logs.save(&entry)?;
        Ok(task)
    }

    /// Moves the task carrying `code` to `target` and records the change in
    /// the audit trail, attributed to `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] when no task carries `code`,
    /// [`TrackerError::Domain`] when `target` is not the one-step advance
    /// from the current status, or [`TrackerError::Store`] when persistence
    /// fails.
    pub fn change_status(
        &self,
        code: TaskCode,
        target: TaskStatus,
        actor: &User,
    ) -> TrackerResult<Task> {
        let mut task = self
            .tasks
            .find_by_code(code)?
            .ok_or_else(|| TrackerError::TaskNotFound(code))?;
        task.transition_to(target)?;
        self.tasks.update(&task)?;
        let entry = StatusLog::record(task.code(), actor.code, target, &*self.clock);
        self.logs.save(&entry)?;
        Ok(task)
    }
}

/// Builds the presentation row for one task.
fn overview(task: &Task, viewer: &User) -> TaskOverview {
    let assignee_label = if task.assignee().code == viewer.code {
        SELF_LABEL.to_owned()
    } else {
        task.assignee().name.clone()
    };
    TaskOverview {
        code: task.code(),
        name: task.name().to_owned(),
        assignee_label,
        status_label: task.status().label(),
    }
}
