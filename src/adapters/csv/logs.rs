//! Flat-file adapter for the status-change audit trail.

use crate::adapters::csv::append_line;
use crate::adapters::csv::codec::LogRecord;
use crate::domain::StatusLog;
use crate::ports::{LogStore, StoreResult};
use cap_std::fs_utf8::Dir;

/// Append-only audit trail backed by one comma-delimited file.
///
/// The file carries no header line. Entries are appended one row at a time
/// and never read back by the tracker.
#[derive(Debug)]
pub struct CsvLogStore {
    dir: Dir,
    file: String,
}

impl CsvLogStore {
    /// Creates a store appending to `file` inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, file: impl Into<String>) -> Self {
        Self {
            dir,
            file: file.into(),
        }
    }
}

impl LogStore for CsvLogStore {
    fn save(&self, log: &StatusLog) -> StoreResult<()> {
        append_line(&self.dir, &self.file, &LogRecord::from_log(log).encode())
    }
}
