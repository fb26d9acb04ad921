//! Record types for the comma-delimited tables.
//!
//! These types map file rows to typed structs and back. They serve as the
//! boundary between the flat files and the domain layer: decoding performs
//! the full semantic validation, so a decoded record never carries a zero
//! code, an unknown status, or an impossible date.
//!
//! Rows are split on commas with no quoting or escaping. A row with the
//! wrong number of fields decodes to `None` and is skipped by callers; a
//! row with the right shape whose fields fail to parse is a hard error.

use crate::domain::{
    DomainError, ParseStatusError, StatusLog, Task, TaskCode, TaskStatus, User, UserCode,
};
use chrono::NaiveDate;
use thiserror::Error;

/// Header line of the user table.
pub const USER_HEADER: &str = "code,name,email,password";

/// Header line of the task table.
pub const TASK_HEADER: &str = "code,name,status,user";

/// Date format used for audit entries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors returned while decoding a row with the expected shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A numeric field did not parse as an integer.
    #[error("{field} '{value}' is not a valid number")]
    Number {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// A code field parsed but failed domain validation.
    #[error(transparent)]
    Code(#[from] DomainError),

    /// The status field named no known status.
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    /// The date field was not a calendar date.
    #[error("change date '{value}' is not a calendar date")]
    Date {
        /// Raw field text.
        value: String,
    },
}

// ============================================================================
// User Records
// ============================================================================

/// File row representation of a registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique user code.
    pub code: UserCode,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Login password.
    pub password: String,
}

impl UserRecord {
    /// Decodes one row of the user table.
    ///
    /// Returns `Ok(None)` when the row does not have exactly four fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the code field fails to parse.
    pub fn decode(line: &str) -> Result<Option<Self>, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[code, name, email, password] = fields.as_slice() else {
            return Ok(None);
        };
        Ok(Some(Self {
            code: parse_user_code("code", code)?,
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        }))
    }

    /// Encodes this record as one file row.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{},{},{},{}",
            self.code, self.name, self.email, self.password
        )
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            code: record.code,
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}

// ============================================================================
// Task Records
// ============================================================================

/// File row representation of a task.
///
/// The assignee is kept as a raw code; resolving it against the user table
/// is the store's concern, not the codec's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Unique task code.
    pub code: TaskCode,
    /// Task name.
    pub name: String,
    /// Current status.
    pub status: TaskStatus,
    /// Code of the assigned user.
    pub user: UserCode,
}

impl TaskRecord {
    /// Builds the row for a domain task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            code: task.code(),
            name: task.name().to_owned(),
            status: task.status(),
            user: task.assignee().code,
        }
    }

    /// Decodes one row of the task table.
    ///
    /// Returns `Ok(None)` when the row does not have exactly four fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the code, status, or user field fails
    /// to parse.
    pub fn decode(line: &str) -> Result<Option<Self>, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[code, name, status, user] = fields.as_slice() else {
            return Ok(None);
        };
        Ok(Some(Self {
            code: parse_task_code("code", code)?,
            name: name.to_owned(),
            status: parse_status(status)?,
            user: parse_user_code("user", user)?,
        }))
    }

    /// Encodes this record as one file row.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{},{},{},{}",
            self.code,
            self.name,
            self.status.code(),
            self.user
        )
    }
}

// ============================================================================
// Log Records
// ============================================================================

/// File row representation of one audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    /// Code of the task whose status changed.
    pub task_code: TaskCode,
    /// Code of the user who made the change.
    pub changed_by: UserCode,
    /// Status the task was changed to.
    pub status: TaskStatus,
    /// Calendar date of the change.
    pub changed_on: NaiveDate,
}

impl LogRecord {
    /// Builds the row for a domain audit entry.
    #[must_use]
    pub const fn from_log(log: &StatusLog) -> Self {
        Self {
            task_code: log.task_code,
            changed_by: log.changed_by,
            status: log.status,
            changed_on: log.changed_on,
        }
    }

    /// Decodes one row of the audit trail.
    ///
    /// Returns `Ok(None)` when the row does not have exactly four fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when any field fails to parse.
    pub fn decode(line: &str) -> Result<Option<Self>, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[task_code, changed_by, status, changed_on] = fields.as_slice() else {
            return Ok(None);
        };
        Ok(Some(Self {
            task_code: parse_task_code("taskCode", task_code)?,
            changed_by: parse_user_code("changeUserCode", changed_by)?,
            status: parse_status(status)?,
            changed_on: parse_date(changed_on)?,
        }))
    }

    /// Encodes this record as one file row.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{},{},{},{}",
            self.task_code,
            self.changed_by,
            self.status.code(),
            self.changed_on.format(DATE_FORMAT)
        )
    }
}

// ============================================================================
// Field parsers
// ============================================================================

fn parse_number(field: &'static str, value: &str) -> Result<u32, RecordError> {
    value.parse().map_err(|_| RecordError::Number {
        field,
        value: value.to_owned(),
    })
}

fn parse_user_code(field: &'static str, value: &str) -> Result<UserCode, RecordError> {
    Ok(UserCode::new(parse_number(field, value)?)?)
}

fn parse_task_code(field: &'static str, value: &str) -> Result<TaskCode, RecordError> {
    Ok(TaskCode::new(parse_number(field, value)?)?)
}

fn parse_status(value: &str) -> Result<TaskStatus, RecordError> {
    let code: u8 = value.parse().map_err(|_| RecordError::Number {
        field: "status",
        value: value.to_owned(),
    })?;
    Ok(TaskStatus::from_code(code)?)
}

fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| RecordError::Date {
        value: value.to_owned(),
    })
}
