//! Registered user aggregate and its public summary.

use super::PasswordDigest;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered account.
///
/// Users are created by registration and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    credential: PasswordDigest,
    registered_at: DateTime<Utc>,
}

impl User {
    /// Creates a user, deriving a salted digest from `password`.
    #[must_use]
    pub fn register(username: impl Into<String>, password: &str, clock: &impl Clock) -> Self {
        Self {
            username: username.into(),
            credential: PasswordDigest::derive(password),
            registered_at: clock.utc(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn credential(&self) -> &PasswordDigest {
        &self.credential
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Returns true when both the username and the password match exactly.
    ///
    /// The username comparison is case-sensitive. The password is checked
    /// against the digest in constant time.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.credential.verify(password)
    }

    /// Returns the public view of this user.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary::new(self.username.clone())
    }
}

/// Public user payload returned by actions and stored in client sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSummary {
    /// Account username.
    pub username: String,
}

impl UserSummary {
    /// Creates a summary for `username`.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
