//! Unit tests for tracker domain types.

use crate::domain::{DomainError, StatusLog, Task, TaskCode, TaskStatus, User, UserCode};
use chrono::Utc;
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn assignee() -> Result<User, DomainError> {
    Ok(User::new(
        UserCode::new(2)?,
        "Sato",
        "sato@example.com",
        "pass2",
    ))
}

#[test]
fn zero_codes_are_rejected_with_their_value() {
    assert_eq!(UserCode::new(0), Err(DomainError::InvalidUserCode(0)));
    assert_eq!(TaskCode::new(0), Err(DomainError::InvalidTaskCode(0)));
}

#[test]
fn codes_display_their_numeric_value() -> eyre::Result<()> {
    ensure!(TaskCode::new(7)?.to_string() == "7");
    ensure!(UserCode::new(3)?.to_string() == "3");
    ensure!(TaskCode::new(7)?.value() == 7);
    Ok(())
}

#[rstest]
fn new_tasks_start_unstarted(assignee: Result<User, DomainError>) -> eyre::Result<()> {
    let task = Task::new(TaskCode::new(1)?, "Design", assignee?);

    ensure!(task.code() == TaskCode::new(1)?);
    ensure!(task.name() == "Design");
    ensure!(task.status() == TaskStatus::Unstarted);
    ensure!(task.assignee().name == "Sato");
    Ok(())
}

#[rstest]
fn restore_preserves_the_persisted_status(assignee: Result<User, DomainError>) -> eyre::Result<()> {
    let task = Task::restore(TaskCode::new(4)?, "Review", TaskStatus::InProgress, assignee?);

    ensure!(task.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
fn transitions_walk_the_ladder_one_step_at_a_time(
    assignee: Result<User, DomainError>,
) -> eyre::Result<()> {
    let mut task = Task::new(TaskCode::new(1)?, "Design", assignee?);

    task.transition_to(TaskStatus::InProgress)?;
    ensure!(task.status() == TaskStatus::InProgress);

    task.transition_to(TaskStatus::Done)?;
    ensure!(task.status() == TaskStatus::Done);
    Ok(())
}

#[rstest]
fn skipping_ahead_is_rejected_and_leaves_the_task_unchanged(
    assignee: Result<User, DomainError>,
) -> eyre::Result<()> {
    let mut task = Task::new(TaskCode::new(1)?, "Design", assignee?);

    let result = task.transition_to(TaskStatus::Done);

    let expected = Err(DomainError::InvalidStatusTransition {
        code: TaskCode::new(1)?,
        from: TaskStatus::Unstarted,
        to: TaskStatus::Done,
    });
    ensure!(result == expected);
    ensure!(task.status() == TaskStatus::Unstarted);
    Ok(())
}

#[rstest]
#[case(TaskStatus::Unstarted)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::Done)]
fn done_tasks_admit_no_further_changes(
    assignee: Result<User, DomainError>,
    #[case] target: TaskStatus,
) -> eyre::Result<()> {
    let mut task = Task::restore(TaskCode::new(1)?, "Design", TaskStatus::Done, assignee?);

    ensure!(task.transition_to(target).is_err());
    ensure!(task.status() == TaskStatus::Done);
    Ok(())
}

#[rstest]
fn record_stamps_the_clock_date(assignee: Result<User, DomainError>) -> eyre::Result<()> {
    let clock = DefaultClock;
    let user = assignee?;

    let before = Utc::now().date_naive();
    let entry = StatusLog::record(TaskCode::new(1)?, user.code, TaskStatus::Unstarted, &clock);
    let after = Utc::now().date_naive();

    ensure!(entry.changed_on == before || entry.changed_on == after);
    ensure!(entry.task_code == TaskCode::new(1)?);
    ensure!(entry.changed_by == user.code);
    ensure!(entry.status == TaskStatus::Unstarted);
    Ok(())
}
