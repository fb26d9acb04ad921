//! Interactive console for the gantt task tracker.
//!
//! Usage:
//!
//! ```text
//! gantt [config-path]
//! ```
//!
//! With no argument the tracker uses the stock layout: a `data` directory
//! under the working directory holding `users.csv`, `tasks.csv`, and
//! `logs.csv`. The `GANTT_DATA_DIR` environment variable overrides the
//! directory. A JSON configuration file may override any part of the
//! layout; a representative file is:
//!
//! ```json
//! {
//!   "data_dir": "/srv/tracker",
//!   "users_file": "users.csv",
//!   "tasks_file": "tasks.csv",
//!   "logs_file": "logs.csv"
//! }
//! ```
//!
//! On startup the tracker creates the data directory, an empty task table,
//! and an empty audit trail when they are absent. The user table is never
//! created: registering users is outside this program.

use camino::Utf8PathBuf;
use gantt::adapters::csv::{CsvLogStore, CsvTaskStore, CsvUserDirectory};
use gantt::config::TrackerConfig;
use gantt::services::{SessionService, TrackerService};
use gantt::shell::Shell;
use mockable::DefaultClock;
use std::env;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while interpreting the command line.
#[derive(Debug, Error)]
enum ArgsError {
    #[error("config path is not valid UTF-8")]
    NonUtf8Path,
    #[error("unexpected extra argument: {0}")]
    UnexpectedArgument(String),
}

fn main() -> Result<(), BoxError> {
    let config = load_config()?;
    let dir = config.prepare()?;

    let users = Arc::new(CsvUserDirectory::new(
        dir.try_clone()?,
        config.users_file.clone(),
    ));
    let tasks = Arc::new(CsvTaskStore::new(
        dir.try_clone()?,
        config.tasks_file.clone(),
        Arc::clone(&users),
    ));
    let logs = Arc::new(CsvLogStore::new(dir, config.logs_file.clone()));
    let session = SessionService::new(Arc::clone(&users));
    let tracker = TrackerService::new(tasks, logs, users, Arc::new(DefaultClock));

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), session, tracker);
    shell.run()?;
    Ok(())
}

/// Reads the optional config-path argument, falling back to defaults plus
/// the environment override.
fn load_config() -> Result<TrackerConfig, BoxError> {
    let mut args = env::args_os().skip(1);
    let Some(arg_os) = args.next() else {
        return Ok(TrackerConfig::from_env());
    };
    if let Some(extra) = args.next() {
        return Err(ArgsError::UnexpectedArgument(extra.to_string_lossy().into_owned()).into());
    }
    let path = arg_os
        .into_string()
        .map(Utf8PathBuf::from)
        .map_err(|_| ArgsError::NonUtf8Path)?;
    Ok(TrackerConfig::load(&path)?)
}
