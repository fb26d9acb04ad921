//! Domain model for single-user task tracking.
//!
//! The domain models registered users, tasks moving through a strictly
//! ordered status progression, and the audit trail of status changes, while
//! keeping all persistence concerns outside of the domain boundary.

mod error;
mod ids;
mod log;
mod status;
mod task;
mod user;

pub use error::{DomainError, ParseStatusError};
pub use ids::{TaskCode, UserCode};
pub use log::StatusLog;
pub use status::TaskStatus;
pub use task::Task;
pub use user::User;
