//! Flat-file adapter for the task table.

use crate::adapters::csv::append_line;
use crate::adapters::csv::codec::{TASK_HEADER, TaskRecord};
use crate::domain::{Task, TaskCode};
use crate::ports::{StoreError, StoreResult, TaskStore, UserDirectory};
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

/// Task store backed by one comma-delimited file.
///
/// The file carries a header line, which is skipped without inspection. A
/// missing or unreadable file reads as an empty table. Assignee codes are
/// resolved against the user directory at read time.
pub struct CsvTaskStore<U> {
    dir: Dir,
    file: String,
    users: Arc<U>,
}

impl<U: UserDirectory> CsvTaskStore<U> {
    /// Creates a store reading and writing `file` inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, file: impl Into<String>, users: Arc<U>) -> Self {
        Self {
            dir,
            file: file.into(),
            users,
        }
    }

    /// Reads every structurally sound row as a raw record, without
    /// resolving assignees.
    fn read_records(&self) -> StoreResult<Vec<TaskRecord>> {
        let Ok(contents) = self.dir.read_to_string(&self.file) else {
            return Ok(Vec::new());
        };
        let mut records = Vec::new();
        for (index, line) in contents.lines().enumerate().skip(1) {
            match TaskRecord::decode(line) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(err) => {
                    return Err(StoreError::corrupt(&self.file, index + 1, err.to_string()));
                }
            }
        }
        Ok(records)
    }

    /// Replaces the whole table with `records`, going through a staging
    /// file so a crash mid-write cannot truncate the live table.
    fn rewrite(&self, records: &[TaskRecord]) -> StoreResult<()> {
        let mut contents = String::from(TASK_HEADER);
        contents.push('\n');
        for record in records {
            contents.push_str(&record.encode());
            contents.push('\n');
        }
        let staging = format!("{}.tmp", self.file);
        self.dir
            .write(&staging, contents.as_bytes())
            .map_err(|err| StoreError::io(&self.file, err))?;
        self.dir
            .rename(&staging, &self.dir, &self.file)
            .map_err(|err| StoreError::io(&self.file, err))
    }

    fn resolve(&self, record: TaskRecord) -> StoreResult<Option<Task>> {
        let Some(assignee) = self.users.find_by_code(record.user)? else {
            return Ok(None);
        };
        Ok(Some(Task::restore(
            record.code,
            record.name,
            record.status,
            assignee,
        )))
    }
}

impl<U: UserDirectory> TaskStore for CsvTaskStore<U> {
    fn find_all(&self) -> StoreResult<Vec<Task>> {
        let mut tasks = Vec::new();
        for record in self.read_records()? {
            // Tasks whose assignee no longer resolves are dropped from the
            // listing; the scan continues.
            if let Some(task) = self.resolve(record)? {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    fn find_by_code(&self, code: TaskCode) -> StoreResult<Option<Task>> {
        let Ok(contents) = self.dir.read_to_string(&self.file) else {
            return Ok(None);
        };
        for (index, line) in contents.lines().enumerate().skip(1) {
            match TaskRecord::decode(line) {
                Ok(Some(record)) if record.code == code => return self.resolve(record),
                Ok(_) => {}
                Err(err) => {
                    return Err(StoreError::corrupt(&self.file, index + 1, err.to_string()));
                }
            }
        }
        Ok(None)
    }

    fn save(&self, task: &Task) -> StoreResult<()> {
        append_line(&self.dir, &self.file, &TaskRecord::from_task(task).encode())
    }

    fn update(&self, task: &Task) -> StoreResult<()> {
        // The rewrite works on raw records, so rows whose assignee does not
        // resolve survive an update of a different task.
        let mut records = self.read_records()?;
        let replacement = TaskRecord::from_task(task);
        for record in &mut records {
            if record.code == replacement.code {
                *record = replacement.clone();
            }
        }
        self.rewrite(&records)
    }
}
