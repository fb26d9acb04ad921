//! Login service for the console session.

use crate::domain::User;
use crate::ports::{StoreError, UserDirectory};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for session operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// No registered user matches the supplied credentials.
    #[error("email or password is incorrect")]
    InvalidCredentials,
    /// The user table could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Credential-checking service.
///
/// There is no session state to hold: a successful login simply hands the
/// matched user back to the caller, who passes it into later operations.
#[derive(Clone)]
pub struct SessionService<U>
where
    U: UserDirectory,
{
    users: Arc<U>,
}

impl<U> SessionService<U>
where
    U: UserDirectory,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Authenticates by exact email and password match.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] when no user matches,
    /// or [`SessionError::Store`] when the user table is damaged.
    pub fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        self.users
            .find_by_credentials(email, password)?
            .ok_or(SessionError::InvalidCredentials)
    }
}
