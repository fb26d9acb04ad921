//! Task status progression.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a tracked task.
///
/// Statuses form a strict one-way ladder: a task may only ever advance to
/// the status directly ahead of its current one, and [`TaskStatus::Done`] is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Unstarted,
    /// Work is underway.
    InProgress,
    /// Work has finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unstarted => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Parses a status from its storage code.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStatusError`] when the code is not `0`, `1`, or `2`.
    pub const fn from_code(code: u8) -> Result<Self, ParseStatusError> {
        match code {
            0 => Ok(Self::Unstarted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            _ => Err(ParseStatusError(code)),
        }
    }

    /// Returns the status directly ahead of this one, or `None` from the
    /// terminal status.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Unstarted => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Reports whether a change from this status to `target` is legal.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Unstarted, Self::InProgress) | (Self::InProgress, Self::Done)
        )
    }

    /// Reports whether this status admits no further changes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the human-readable label shown in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unstarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
