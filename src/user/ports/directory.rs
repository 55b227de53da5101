//! Observable user directory port.

use crate::observable::{ObservableError, Subscription};
use crate::user::domain::User;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Callback notified with the full user list.
pub type DirectoryListener = Arc<dyn Fn(&Vec<User>) + Send + Sync>;

/// Ordered, observable list of registered users.
///
/// Insertion order is registration order. Every [`UserDirectory::replace`]
/// is a whole-value swap that notifies all subscribers synchronously, in
/// subscription order, before it returns.
pub trait UserDirectory: Send + Sync {
    /// Returns a snapshot of the current user list.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Unavailable`] when the backing store
    /// cannot be read.
    fn list(&self) -> UserDirectoryResult<Vec<User>>;

    /// Replaces the full user list and notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Unavailable`] when the backing store
    /// cannot be written.
    fn replace(&self, users: Vec<User>) -> UserDirectoryResult<()>;

    /// Attaches `listener`, invoking it immediately with the current list.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Unavailable`] when the backing store
    /// cannot be read.
    fn subscribe(&self, listener: DirectoryListener) -> UserDirectoryResult<Subscription>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// The backing store could not be accessed.
    #[error("user directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a backing-store error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

impl From<ObservableError> for UserDirectoryError {
    fn from(err: ObservableError) -> Self {
        Self::unavailable(err)
    }
}
