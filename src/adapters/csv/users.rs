//! Flat-file adapter for the registered user table.

use crate::adapters::csv::codec::UserRecord;
use crate::domain::{User, UserCode};
use crate::ports::{StoreError, StoreResult, UserDirectory};
use cap_std::fs_utf8::Dir;

/// User directory backed by one comma-delimited file.
///
/// The file carries a header line, which is skipped without inspection. A
/// missing or unreadable file reads as an empty table.
#[derive(Debug)]
pub struct CsvUserDirectory {
    dir: Dir,
    file: String,
}

impl CsvUserDirectory {
    /// Creates a directory reading `file` inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, file: impl Into<String>) -> Self {
        Self {
            dir,
            file: file.into(),
        }
    }

    /// Scans rows in file order and returns the first user matching the
    /// predicate. Rows past the match are never decoded.
    fn scan<P>(&self, matches: P) -> StoreResult<Option<User>>
    where
        P: Fn(&UserRecord) -> bool,
    {
        let Ok(contents) = self.dir.read_to_string(&self.file) else {
            return Ok(None);
        };
        for (index, line) in contents.lines().enumerate().skip(1) {
            match UserRecord::decode(line) {
                Ok(Some(record)) if matches(&record) => return Ok(Some(record.into())),
                Ok(_) => {}
                Err(err) => {
                    return Err(StoreError::corrupt(&self.file, index + 1, err.to_string()));
                }
            }
        }
        Ok(None)
    }
}

impl UserDirectory for CsvUserDirectory {
    fn find_by_code(&self, code: UserCode) -> StoreResult<Option<User>> {
        self.scan(|record| record.code == code)
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> StoreResult<Option<User>> {
        self.scan(|record| record.email == email && record.password == password)
    }
}
