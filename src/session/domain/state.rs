//! Two-state client session and its stored representation.

use crate::user::domain::UserSummary;

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "user";

/// Identity of the current client.
///
/// Stored as the JSON encoding of `Option<UserSummary>`: either
/// `{"username": "..."}` or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClientSession {
    /// No user is signed in.
    #[default]
    Anonymous,
    /// The wrapped user is signed in.
    Authenticated(UserSummary),
}

impl ClientSession {
    /// Decodes a stored value.
    ///
    /// Absent, empty, `null`, and unparsable values all decode to
    /// [`ClientSession::Anonymous`].
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        match raw.map(serde_json::from_str::<Option<UserSummary>>) {
            Some(Ok(Some(user))) => Self::Authenticated(user),
            _ => Self::Anonymous,
        }
    }

    /// Encodes the session for storage.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when serialization fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.user())
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserSummary> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// Returns true when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
