//! Unit tests for service orchestration over mocked stores.
//!
//! The mocks pin the write-order contract: the task table is written
//! before the audit trail, and nothing is written after a rejection.

use crate::domain::{DomainError, Task, TaskCode, TaskStatus, User, UserCode};
use crate::ports::{MockLogStore, MockTaskStore, MockUserDirectory, StoreError};
use crate::services::{SessionError, SessionService, TrackerError, TrackerService};
use eyre::ensure;
use mockall::Sequence;
use mockall::predicate::eq;
use mockable::DefaultClock;
use std::sync::Arc;

fn user(code: u32, name: &str) -> Result<User, DomainError> {
    Ok(User::new(
        UserCode::new(code)?,
        name,
        format!("{}@example.com", name.to_lowercase()),
        "secret",
    ))
}

fn tracker(
    tasks: MockTaskStore,
    logs: MockLogStore,
    users: MockUserDirectory,
) -> TrackerService<MockTaskStore, MockLogStore, MockUserDirectory, DefaultClock> {
    TrackerService::new(
        Arc::new(tasks),
        Arc::new(logs),
        Arc::new(users),
        Arc::new(DefaultClock),
    )
}

#[test]
fn create_persists_the_task_before_the_audit_entry() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let assignee = user(2, "Sato")?;
    let mut tasks = MockTaskStore::new();
    let mut logs = MockLogStore::new();
    let mut users = MockUserDirectory::new();
    let mut order = Sequence::new();

    users
        .expect_find_by_code()
        .with(eq(UserCode::new(2)?))
        .times(1)
        .returning(move |_| Ok(Some(assignee.clone())));
    tasks
        .expect_save()
        .withf(|task| task.code().value() == 1 && task.status() == TaskStatus::Unstarted)
        .times(1)
        .in_sequence(&mut order)
        .returning(|_| Ok(()));
    logs.expect_save()
        .withf(|entry| {
            entry.task_code.value() == 1
                && entry.changed_by.value() == 1
                && entry.status == TaskStatus::Unstarted
        })
        .times(1)
        .in_sequence(&mut order)
        .returning(|_| Ok(()));

    let service = tracker(tasks, logs, users);
    let task = service.create(TaskCode::new(1)?, "Design", UserCode::new(2)?, &actor)?;

    ensure!(task.assignee().name == "Sato");
    ensure!(task.status() == TaskStatus::Unstarted);
    Ok(())
}

#[test]
fn create_rejects_an_unknown_assignee_without_writing() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let mut users = MockUserDirectory::new();
    users.expect_find_by_code().times(1).returning(|_| Ok(None));
    let mut tasks = MockTaskStore::new();
    tasks.expect_save().times(0);
    let mut logs = MockLogStore::new();
    logs.expect_save().times(0);

    let service = tracker(tasks, logs, users);
    let result = service.create(TaskCode::new(1)?, "Design", UserCode::new(9)?, &actor);

    ensure!(matches!(
        result,
        Err(TrackerError::UnknownAssignee(code)) if code.value() == 9
    ));
    Ok(())
}

#[test]
fn create_skips_the_audit_entry_when_the_task_write_fails() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let assignee = user(2, "Sato")?;
    let mut users = MockUserDirectory::new();
    users
        .expect_find_by_code()
        .times(1)
        .returning(move |_| Ok(Some(assignee.clone())));
    let mut tasks = MockTaskStore::new();
    tasks.expect_save().times(1).returning(|_| {
        Err(StoreError::io(
            "tasks.csv",
            std::io::Error::other("disk full"),
        ))
    });
    let mut logs = MockLogStore::new();
    logs.expect_save().times(0);

    let service = tracker(tasks, logs, users);
    let result = service.create(TaskCode::new(1)?, "Design", UserCode::new(2)?, &actor);

    ensure!(matches!(
        result,
        Err(TrackerError::Store(StoreError::Io { .. }))
    ));
    Ok(())
}

#[test]
fn change_status_updates_the_task_before_the_audit_entry() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let assignee = user(2, "Sato")?;
    let stored = Task::restore(TaskCode::new(1)?, "Design", TaskStatus::InProgress, assignee);
    let mut tasks = MockTaskStore::new();
    let mut logs = MockLogStore::new();
    let mut order = Sequence::new();

    tasks
        .expect_find_by_code()
        .with(eq(TaskCode::new(1)?))
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));
    tasks
        .expect_update()
        .withf(|task| task.status() == TaskStatus::Done)
        .times(1)
        .in_sequence(&mut order)
        .returning(|_| Ok(()));
    logs.expect_save()
        .withf(|entry| entry.status == TaskStatus::Done && entry.changed_by.value() == 1)
        .times(1)
        .in_sequence(&mut order)
        .returning(|_| Ok(()));

    let service = tracker(tasks, logs, MockUserDirectory::new());
    let task = service.change_status(TaskCode::new(1)?, TaskStatus::Done, &actor)?;

    ensure!(task.status() == TaskStatus::Done);
    Ok(())
}

#[test]
fn change_status_rejects_a_skip_ahead_without_writing() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let assignee = user(2, "Sato")?;
    let stored = Task::restore(TaskCode::new(1)?, "Design", TaskStatus::Unstarted, assignee);
    let mut tasks = MockTaskStore::new();
    tasks
        .expect_find_by_code()
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));
    tasks.expect_update().times(0);
    let mut logs = MockLogStore::new();
    logs.expect_save().times(0);

    let service = tracker(tasks, logs, MockUserDirectory::new());
    let result = service.change_status(TaskCode::new(1)?, TaskStatus::Done, &actor);

    ensure!(matches!(
        result,
        Err(TrackerError::Domain(DomainError::InvalidStatusTransition {
            from: TaskStatus::Unstarted,
            to: TaskStatus::Done,
            ..
        }))
    ));
    Ok(())
}

#[test]
fn change_status_reports_a_missing_task() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let mut tasks = MockTaskStore::new();
    tasks.expect_find_by_code().times(1).returning(|_| Ok(None));
    tasks.expect_update().times(0);
    let mut logs = MockLogStore::new();
    logs.expect_save().times(0);

    let service = tracker(tasks, logs, MockUserDirectory::new());
    let result = service.change_status(TaskCode::new(8)?, TaskStatus::InProgress, &actor);

    ensure!(matches!(
        result,
        Err(TrackerError::TaskNotFound(code)) if code.value() == 8
    ));
    Ok(())
}

#[test]
fn change_status_skips_the_audit_entry_when_the_update_fails() -> eyre::Result<()> {
    let actor = user(1, "Yamada")?;
    let assignee = user(2, "Sato")?;
    let stored = Task::restore(TaskCode::new(1)?, "Design", TaskStatus::InProgress, assignee);
    let mut tasks = MockTaskStore::new();
    tasks
        .expect_find_by_code()
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));
    tasks.expect_update().times(1).returning(|_| {
        Err(StoreError::io(
            "tasks.csv",
            std::io::Error::other("read-only file system"),
        ))
    });
    let mut logs = MockLogStore::new();
    logs.expect_save().times(0);

    let service = tracker(tasks, logs, MockUserDirectory::new());
    let result = service.change_status(TaskCode::new(1)?, TaskStatus::Done, &actor);

    ensure!(matches!(
        result,
        Err(TrackerError::Store(StoreError::Io { .. }))
    ));
    Ok(())
}

#[test]
fn list_all_labels_the_viewer_as_you() -> eyre::Result<()> {
    let viewer = user(1, "Yamada")?;
    let other = user(2, "Sato")?;
    let mine = Task::restore(
        TaskCode::new(1)?,
        "Design",
        TaskStatus::Unstarted,
        viewer.clone(),
    );
    let theirs = Task::restore(TaskCode::new(2)?, "Review", TaskStatus::Done, other);
    let listing = vec![mine, theirs];
    let mut tasks = MockTaskStore::new();
    tasks
        .expect_find_all()
        .times(1)
        .returning(move || Ok(listing.clone()));

    let service = tracker(tasks, MockLogStore::new(), MockUserDirectory::new());
    let rows = service.list_all(&viewer)?;

    let labels: Vec<_> = rows.iter().map(|row| row.assignee_label.as_str()).collect();
    ensure!(labels == ["you", "Sato"]);
    let statuses: Vec<_> = rows.iter().map(|row| row.status_label).collect();
    ensure!(statuses == ["Not started", "Done"]);
    Ok(())
}

#[test]
fn login_returns_the_matching_user() -> eyre::Result<()> {
    let registered = user(1, "Yamada")?;
    let mut users = MockUserDirectory::new();
    let found = registered.clone();
    users
        .expect_find_by_credentials()
        .with(eq("yamada@example.com"), eq("secret"))
        .times(1)
        .returning(move |_, _| Ok(Some(found.clone())));

    let service = SessionService::new(Arc::new(users));
    let logged_in = service.login("yamada@example.com", "secret")?;

    ensure!(logged_in == registered);
    Ok(())
}

#[test]
fn login_rejects_unmatched_credentials() -> eyre::Result<()> {
    let mut users = MockUserDirectory::new();
    users
        .expect_find_by_credentials()
        .times(1)
        .returning(|_, _| Ok(None));

    let service = SessionService::new(Arc::new(users));
    let result = service.login("yamada@example.com", "wrong");

    ensure!(matches!(result, Err(SessionError::InvalidCredentials)));
    Ok(())
}
