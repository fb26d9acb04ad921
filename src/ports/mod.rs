//! Port contracts for tracker persistence.
//!
//! Ports define storage-agnostic interfaces used by the tracker services.
//! All operations are synchronous and blocking; implementations open the
//! backing storage per call and hold nothing open between calls.

mod error;
mod log_store;
mod task_store;
mod user_directory;

pub use error::{StoreError, StoreResult};
pub use log_store::LogStore;
pub use task_store::TaskStore;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use log_store::MockLogStore;
#[cfg(test)]
pub use task_store::MockTaskStore;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
