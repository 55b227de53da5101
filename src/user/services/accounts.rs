//! Service layer for the login and registration form actions.
//!
//! Provides [`AccountService`] which validates submitted forms against the
//! injected [`UserDirectory`] and appends newly registered users.

use crate::user::{
    domain::{ActionFailure, User, UserSummary},
    ports::{UserDirectory, UserDirectoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Minimum length of a registration password, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Minimum length of a registration username, in UTF-16 code units.
pub const MIN_USERNAME_LENGTH: usize = 4;

/// Submitted login form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl LoginForm {
    /// Creates a login form from the `username` and `password` fields.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Submitted registration form.
///
/// `passwords` holds the repeated `password[]` field in submission order:
/// the password first, then its confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    username: String,
    passwords: Vec<String>,
}

impl RegistrationForm {
    /// Creates a registration form.
    #[must_use]
    pub fn new(username: impl Into<String>, passwords: impl IntoIterator<Item = String>) -> Self {
        Self {
            username: username.into(),
            passwords: passwords.into_iter().collect(),
        }
    }

    /// Convenience constructor for a password and its confirmation.
    #[must_use]
    pub fn with_confirmation(
        username: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self::new(username, [password.into(), confirmation.into()])
    }

    fn password(&self) -> &str {
        self.passwords.first().map_or("", String::as_str)
    }

    fn confirmation(&self) -> &str {
        self.passwords.get(1).map_or("", String::as_str)
    }
}

/// Length as a browser form counts it: astral characters count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Service-level errors for account actions.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// The submitted form was rejected.
    #[error(transparent)]
    Rejected(#[from] ActionFailure),
    /// The directory could not be accessed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Login and registration orchestration service.
#[derive(Clone)]
pub struct AccountService<D, C>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> AccountService<D, C>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Returns the directory this service reads and writes.
    #[must_use]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Checks submitted credentials against the directory.
    ///
    /// An unknown username and a wrong password are indistinguishable to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ActionFailure::InvalidCredentials`] when no user matches, or
    /// [`AccountServiceError::Directory`] when the directory is unavailable.
    pub fn login(&self, form: &LoginForm) -> AccountServiceResult<UserSummary> {
        let users = self.directory.list()?;
        let user = users
            .iter()
            .find(|user| user.matches(&form.username, &form.password))
            .ok_or(ActionFailure::InvalidCredentials)?;
        debug!(username = %user.username(), "login accepted");
        Ok(user.summary())
    }

    /// Validates a registration form and appends the new user.
    ///
    /// Checks run in order and stop at the first failure: password length,
    /// password confirmation, username length, username uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first [`ActionFailure`] encountered, or
    /// [`AccountServiceError::Directory`] when the directory is unavailable.
    pub fn register(&self, form: &RegistrationForm) -> AccountServiceResult<UserSummary> {
        let password = form.password();

        if utf16_len(password) < MIN_PASSWORD_LENGTH {
            return Err(ActionFailure::WeakPassword.into());
        }

        if password != form.confirmation() {
            return Err(ActionFailure::PasswordMismatch.into());
        }

        if utf16_len(&form.username) < MIN_USERNAME_LENGTH {
            return Err(ActionFailure::InvalidUsername.into());
        }

        let mut users = self.directory.list()?;
        if users.iter().any(|user| user.username() == form.username) {
            return Err(ActionFailure::UsernameTaken.into());
        }

        let user = User::register(form.username.clone(), password, &*self.clock);
        let summary = user.summary();
        users.push(user);
        self.directory.replace(users)?;

        info!(username = %summary.username, "user registered");
        Ok(summary)
    }
}
