//! Process-lifetime user directory backed by an observable cell.

use crate::observable::{Observable, Subscription};
use crate::user::{
    domain::User,
    ports::{DirectoryListener, UserDirectory, UserDirectoryResult},
};
use mockable::Clock;

/// Username of the account present on every process start.
pub const SEED_USERNAME: &str = "dan";

/// Password of the account present on every process start.
pub const SEED_PASSWORD: &str = "password";

/// Thread-safe in-memory user directory.
///
/// Contents are lost when the process exits.
#[derive(Debug, Clone)]
pub struct InMemoryUserDirectory {
    users: Observable<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Creates a directory holding `users` in the given order.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Observable::new(users),
        }
    }

    /// Creates a directory holding only the seeded account.
    #[must_use]
    pub fn seeded(clock: &impl Clock) -> Self {
        Self::with_users(vec![User::register(SEED_USERNAME, SEED_PASSWORD, clock)])
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn list(&self) -> UserDirectoryResult<Vec<User>> {
        Ok(self.users.get()?)
    }

    fn replace(&self, users: Vec<User>) -> UserDirectoryResult<()> {
        self.users.set(users)?;
        Ok(())
    }

    fn subscribe(&self, listener: DirectoryListener) -> UserDirectoryResult<Subscription> {
        Ok(self.users.subscribe(listener)?)
    }
}
