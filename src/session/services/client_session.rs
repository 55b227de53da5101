//! Persisted, observable client session.

use crate::observable::{Listener, Observable, ObservableError, Subscription};
use crate::session::{
    domain::{ClientSession, SESSION_KEY},
    ports::{KeyValueStore, KeyValueStoreError},
};
use crate::user::domain::UserSummary;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or updating a client session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),
    /// The session could not be serialized.
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
    /// The in-memory state lock was poisoned.
    #[error(transparent)]
    State(#[from] ObservableError),
}

/// Result type for client session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session of one client, mirrored into a [`KeyValueStore`].
///
/// The session is read once on [`ClientUserSession::load`]; every later
/// change is written to the store before listeners are notified.
#[derive(Debug)]
pub struct ClientUserSession<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    state: Observable<ClientSession>,
}

impl<S> ClientUserSession<S>
where
    S: KeyValueStore,
{
    /// Loads the session stored under [`SESSION_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store cannot be read.
    pub fn load(store: Arc<S>) -> SessionResult<Self> {
        let raw = store.get(SESSION_KEY)?;
        let session = ClientSession::decode(raw.as_deref());
        debug!(
            authenticated = session.is_authenticated(),
            "client session loaded"
        );
        Ok(Self {
            store,
            state: Observable::new(session),
        })
    }

    /// Returns the current session state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::State`] when the state lock is poisoned.
    pub fn current(&self) -> SessionResult<ClientSession> {
        Ok(self.state.get()?)
    }

    /// Returns true when a user is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::State`] when the state lock is poisoned.
    pub fn exists(&self) -> SessionResult<bool> {
        Ok(self.current()?.is_authenticated())
    }

    /// Replaces the session, persisting it before notifying listeners.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when encoding or persistence fails; the
    /// in-memory state is left unchanged in that case.
    pub fn set(&self, session: ClientSession) -> SessionResult<()> {
        let encoded = session.encode()?;
        self.store.set(SESSION_KEY, &encoded)?;
        self.state.set(session)?;
        Ok(())
    }

    /// Marks `user` as signed in.
    ///
    /// # Errors
    ///
    /// See [`ClientUserSession::set`].
    pub fn sign_in(&self, user: UserSummary) -> SessionResult<()> {
        self.set(ClientSession::Authenticated(user))
    }

    /// Removes the stored session and returns to the anonymous state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the store cannot be written.
    pub fn clear(&self) -> SessionResult<()> {
        self.store.clear(SESSION_KEY)?;
        self.state.set(ClientSession::Anonymous)?;
        Ok(())
    }

    /// Attaches `listener`, invoking it immediately with the current state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::State`] when the state lock is poisoned.
    pub fn subscribe(&self, listener: Listener<ClientSession>) -> SessionResult<Subscription> {
        Ok(self.state.subscribe(listener)?)
    }
}
