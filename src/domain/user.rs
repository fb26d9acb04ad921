//! Registered users of the tracker.

use super::UserCode;
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Users are reference data: the tracker reads them from the user table but
/// never creates or modifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user code.
    pub code: UserCode,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Login password, stored and compared as an opaque string.
    pub password: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        code: UserCode,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
