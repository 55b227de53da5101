//! Validation failures reported by the login and registration actions.

use thiserror::Error;

/// HTTP status carried by every action failure.
const ACTION_FAILURE_STATUS: u16 = 400;

/// User-correctable failure returned by a form action.
///
/// The display text of each variant is the message shown next to the form.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ActionFailure {
    /// The first password entry is shorter than the minimum length.
    #[error("Password is too weak.")]
    WeakPassword,

    /// The password and its confirmation differ.
    #[error("Passwords mismatch.")]
    PasswordMismatch,

    /// The username is shorter than the minimum length.
    #[error("Username is invalid.")]
    InvalidUsername,

    /// Another account already uses the username.
    #[error("Username is already in use.")]
    UsernameTaken,

    /// No account matches the submitted username and password.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

impl ActionFailure {
    /// Returns the HTTP status for the failure (always 400).
    #[must_use]
    pub const fn status(self) -> u16 {
        ACTION_FAILURE_STATUS
    }
}
