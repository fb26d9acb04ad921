//! Shared fixtures for file-backed integration tests.
//!
//! Each test works inside its own temp directory, seeding table files with
//! plain `std::fs` writes and handing the stores a capability handle on the
//! directory.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use eyre::eyre;
use gantt::adapters::csv::{CsvLogStore, CsvTaskStore, CsvUserDirectory};
use gantt::services::{SessionService, TrackerService};
use mockable::DefaultClock;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Stock user table: header plus two registered users.
pub const USERS_FIXTURE: &str = "\
code,name,email,password
1,Yamada,yamada@example.com,pass1
2,Sato,sato@example.com,pass2
";

/// File-backed tracker service as wired by the binary.
pub type FileTracker =
    TrackerService<CsvTaskStore<CsvUserDirectory>, CsvLogStore, CsvUserDirectory, DefaultClock>;

/// Returns the temp directory as a UTF-8 path.
pub fn utf8_path(temp: &TempDir) -> eyre::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .map_err(|bad| eyre!("non-UTF-8 temp path: {}", bad.display()))
}

/// Opens a capability handle on the temp directory.
pub fn open_dir(temp: &TempDir) -> eyre::Result<Dir> {
    Ok(Dir::open_ambient_dir(utf8_path(temp)?, ambient_authority())?)
}

/// Writes a table file under the temp directory.
pub fn seed(temp: &TempDir, file: &str, contents: &str) -> eyre::Result<()> {
    fs::write(temp.path().join(file), contents)?;
    Ok(())
}

/// Reads a table file back as text.
pub fn table(temp: &TempDir, file: &str) -> eyre::Result<String> {
    Ok(fs::read_to_string(temp.path().join(file))?)
}

/// Today's date as it appears in the audit trail.
#[must_use]
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Builds a user directory over the temp directory.
pub fn user_directory(temp: &TempDir) -> eyre::Result<CsvUserDirectory> {
    Ok(CsvUserDirectory::new(open_dir(temp)?, "users.csv"))
}

/// Builds a task store over the temp directory.
pub fn task_store(temp: &TempDir) -> eyre::Result<CsvTaskStore<CsvUserDirectory>> {
    let dir = open_dir(temp)?;
    let users = Arc::new(CsvUserDirectory::new(dir.try_clone()?, "users.csv"));
    Ok(CsvTaskStore::new(dir, "tasks.csv", users))
}

/// Builds a log store over the temp directory.
pub fn log_store(temp: &TempDir) -> eyre::Result<CsvLogStore> {
    Ok(CsvLogStore::new(open_dir(temp)?, "logs.csv"))
}

/// Builds the login service over the temp directory.
pub fn session(temp: &TempDir) -> eyre::Result<SessionService<CsvUserDirectory>> {
    Ok(SessionService::new(Arc::new(user_directory(temp)?)))
}

/// Builds the full file-backed service stack over the temp directory.
pub fn tracker(temp: &TempDir) -> eyre::Result<FileTracker> {
    let dir = open_dir(temp)?;
    let users = Arc::new(CsvUserDirectory::new(dir.try_clone()?, "users.csv"));
    let tasks = Arc::new(CsvTaskStore::new(
        dir.try_clone()?,
        "tasks.csv",
        Arc::clone(&users),
    ));
    let logs = Arc::new(CsvLogStore::new(dir, "logs.csv"));
    Ok(TrackerService::new(
        tasks,
        logs,
        users,
        Arc::new(DefaultClock),
    ))
}
