//! Interactive console shell.
//!
//! The shell owns no business rules: it prompts, validates the shape of the
//! input, calls the services, and prints their answers or errors. All I/O
//! goes through the injected reader and writer, so complete sessions can be
//! driven from scripted input in tests.

use crate::domain::{TaskCode, TaskStatus, User, UserCode};
use crate::ports::{LogStore, TaskStore, UserDirectory};
use crate::services::{SessionService, TrackerService};
use mockable::Clock;
use std::io::{self, BufRead, Write};

/// Longest task name accepted at the prompt.
const MAX_TASK_NAME_CHARS: usize = 10;

/// Outcome of one interactive flow: carry on, or stop because the input
/// stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven console session over injected input and output streams.
pub struct Shell<R, W, T, L, U, C>
where
    R: BufRead,
    W: Write,
    T: TaskStore,
    L: LogStore,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    input: R,
    output: W,
    session: SessionService<U>,
    tracker: TrackerService<T, L, U, C>,
}

impl<R, W, T, L, U, C> Shell<R, W, T, L, U, C>
where
    R: BufRead,
    W: Write,
    T: TaskStore,
    L: LogStore,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a shell over the given streams and services.
    #[must_use]
    pub const fn new(
        input: R,
        output: W,
        session: SessionService<U>,
        tracker: TrackerService<T, L, U, C>,
    ) -> Self {
        Self {
            input,
            output,
            session,
            tracker,
        }
    }

    /// Runs one complete session: login, then the main menu until logout
    /// or end of input.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when reading or writing a stream
    /// fails. Service errors are printed and never abort the session.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the task tracker!")?;
        if let Some(user) = self.login()? {
            writeln!(self.output, "Hello, {}.", user.name)?;
            self.main_menu(&user)?;
        }
        self.output.flush()
    }

    /// Prompts for credentials until a login succeeds.
    fn login(&mut self) -> io::Result<Option<User>> {
        loop {
            let Some(email) = self.prompt("Email: ")? else {
                return Ok(None);
            };
            let Some(password) = self.prompt("Password: ")? else {
                return Ok(None);
            };
            match self.session.login(&email, &password) {
                Ok(user) => return Ok(Some(user)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn main_menu(&mut self, user: &User) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose one of the following options.")?;
            writeln!(self.output, "1. List tasks, 2. Register a task, 3. Log out")?;
            let Some(choice) = self.prompt("Choice: ")? else {
                return Ok(());
            };
            let flow = match choice.as_str() {
                "1" => self.browse_tasks(user)?,
                "2" => self.register_task(user)?,
                "3" => {
                    writeln!(self.output, "You have logged out.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Select a number from 1 to 3.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Prints the task listing, then offers the status-change submenu.
    fn browse_tasks(&mut self, user: &User) -> io::Result<Flow> {
        match self.tracker.list_all(user) {
            Ok(rows) => {
                for row in rows {
                    writeln!(
                        self.output,
                        "{}. Task: {}, Assignee: {}, Status: {}",
                        row.code, row.name, row.assignee_label, row.status_label
                    )?;
                }
            }
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        }
        self.task_submenu(user)
    }

    fn task_submenu(&mut self, user: &User) -> io::Result<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose one of the following options.")?;
            writeln!(
                self.output,
                "1. Change a task status, 2. Back to the main menu"
            )?;
            let Some(choice) = self.prompt("Choice: ")? else {
                return Ok(Flow::Quit);
            };
            match choice.as_str() {
                "1" => return self.change_task_status(user),
                "2" => return Ok(Flow::Continue),
                _ => writeln!(self.output, "Select 1 or 2.")?,
            }
        }
    }

    fn register_task(&mut self, user: &User) -> io::Result<Flow> {
        loop {
            let Some(code_text) = self.prompt("Task code: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(code) = parse_task_code(&code_text) else {
                writeln!(
                    self.output,
                    "The task code must be entered as a positive number."
                )?;
                continue;
            };
            let Some(name) = self.prompt("Task name: ")? else {
                return Ok(Flow::Quit);
            };
            if name.chars().count() > MAX_TASK_NAME_CHARS {
                writeln!(
                    self.output,
                    "The task name must be {MAX_TASK_NAME_CHARS} characters or fewer."
                )?;
                continue;
            }
            let Some(assignee_text) = self.prompt("Assignee user code: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(assignee) = parse_user_code(&assignee_text) else {
                writeln!(
                    self.output,
                    "The user code must be entered as a positive number."
                )?;
                continue;
            };
            match self.tracker.create(code, name, assignee, user) {
                Ok(task) => {
                    writeln!(self.output, "{} has been registered.", task.name())?;
                    return Ok(Flow::Continue);
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn change_task_status(&mut self, user: &User) -> io::Result<Flow> {
        loop {
            let Some(code_text) = self.prompt("Task code to update: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(code) = parse_task_code(&code_text) else {
                writeln!(
                    self.output,
                    "The task code must be entered as a positive number."
                )?;
                continue;
            };
            writeln!(self.output, "Select the new status.")?;
            writeln!(self.output, "1. In progress, 2. Done")?;
            let Some(choice) = self.prompt("Choice: ")? else {
                return Ok(Flow::Quit);
            };
            let target = match choice.as_str() {
                "1" => TaskStatus::InProgress,
                "2" => TaskStatus::Done,
                _ => {
                    writeln!(self.output, "Select 1 or 2.")?;
                    continue;
                }
            };
            match self.tracker.change_status(code, target, user) {
                Ok(_) => {
                    writeln!(self.output, "The status has been updated.")?;
                    return Ok(Flow::Continue);
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Writes `label` without a trailing newline and reads one input line.
    ///
    /// Returns `None` when the input stream is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_owned()))
    }
}

/// Parses a digits-only field into a task code, rejecting zero.
fn parse_task_code(text: &str) -> Option<TaskCode> {
    text.parse().ok().and_then(|value| TaskCode::new(value).ok())
}

/// Parses a digits-only field into a user code, rejecting zero.
fn parse_user_code(text: &str) -> Option<UserCode> {
    text.parse().ok().and_then(|value| UserCode::new(value).ok())
}
