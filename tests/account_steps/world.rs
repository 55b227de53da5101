//! Shared world state for account BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use postdesk::{
    session::{adapters::InMemoryKeyValueStore, services::ClientUserSession},
    user::{
        adapters::memory::InMemoryUserDirectory,
        domain::{ActionOutcome, UserSummary},
        services::{AccountService, AccountServiceError, AccountServiceResult},
    },
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestAccountService = AccountService<InMemoryUserDirectory, DefaultClock>;

/// Scenario world for account behaviour tests.
pub struct AccountWorld {
    /// The account service under test, over a seeded directory.
    pub service: TestAccountService,
    /// Session of the simulated client.
    pub session: ClientUserSession<InMemoryKeyValueStore>,
    /// Outcome of the last login or registration attempt.
    pub last_outcome: Option<ActionOutcome>,
}

impl AccountWorld {
    /// Creates a world with a seeded directory and an anonymous client.
    ///
    /// # Panics
    ///
    /// Panics if the client session cannot be loaded.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let directory = Arc::new(InMemoryUserDirectory::seeded(&*clock));
        let session = ClientUserSession::load(Arc::new(InMemoryKeyValueStore::new()))
            .expect("empty store should load");
        Self {
            service: AccountService::new(directory, clock),
            session,
            last_outcome: None,
        }
    }

    /// Records the outcome of an account action the way the form pages do.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory itself failed.
    pub fn record(
        &mut self,
        result: AccountServiceResult<UserSummary>,
    ) -> Result<(), eyre::Report> {
        let outcome = match result {
            Ok(user) => ActionOutcome::success(user),
            Err(AccountServiceError::Rejected(failure)) => ActionOutcome::from(failure),
            Err(err @ AccountServiceError::Directory(_)) => {
                return Err(eyre::eyre!("directory failure: {err}"));
            }
        };
        self.last_outcome = Some(outcome);
        Ok(())
    }
}

impl Default for AccountWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AccountWorld {
    AccountWorld::default()
}
