//! Read-only port for the registered user table.

use crate::domain::{User, UserCode};
use crate::ports::StoreResult;

/// User lookup contract.
///
/// The user table is reference data: there are no write operations.
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by code.
    ///
    /// Returns `None` when no user carries the code or the backing table is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`](crate::ports::StoreError::Corrupt)
    /// when a row is semantically damaged.
    fn find_by_code(&self, code: UserCode) -> StoreResult<Option<User>>;

    /// Finds a user whose email and password both match exactly.
    ///
    /// Returns `None` when no user matches or the backing table is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`](crate::ports::StoreError::Corrupt)
    /// when a row is semantically damaged.
    fn find_by_credentials(&self, email: &str, password: &str) -> StoreResult<Option<User>>;
}
