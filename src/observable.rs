//! Observable value cell shared by the user directory and the client session.
//!
//! An [`Observable`] holds a single value and a list of listeners. Listeners
//! are invoked immediately on subscription with the current value and then
//! synchronously, in subscription order, on every [`Observable::set`].
//! Listeners always run after the internal lock is released, so a listener
//! may read the cell it observes.

use std::fmt;
use std::sync::{Arc, RwLock, Weak};
use thiserror::Error;

/// Callback invoked with the observed value.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Errors returned by observable cells.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObservableError {
    /// A thread panicked while holding the cell lock.
    #[error("observable state lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for observable operations.
pub type ObservableResult<T> = Result<T, ObservableError>;

struct ObservableState<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_listener_id: u64,
}

/// Thread-safe value cell with subscribe-on-change semantics.
pub struct Observable<T> {
    state: Arc<RwLock<ObservableState<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

impl<T> Observable<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a cell holding `value` with no listeners.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(ObservableState {
                value,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Returns a snapshot of the current value.
    ///
    /// # Errors
    ///
    /// Returns [`ObservableError::Poisoned`] when the lock is poisoned.
    pub fn get(&self) -> ObservableResult<T> {
        let state = self
            .state
            .read()
            .map_err(|err| ObservableError::Poisoned(err.to_string()))?;
        Ok(state.value.clone())
    }

    /// Swaps in a new value and notifies every listener before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ObservableError::Poisoned`] when the lock is poisoned.
    pub fn set(&self, value: T) -> ObservableResult<()> {
        let (snapshot, listeners) = {
            let mut state = self
                .state
                .write()
                .map_err(|err| ObservableError::Poisoned(err.to_string()))?;
            state.value = value;
            let listeners: Vec<Listener<T>> = state
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (state.value.clone(), listeners)
        };

        for listener in listeners {
            listener(&snapshot);
        }
        Ok(())
    }

    /// Registers a listener and invokes it immediately with the current value.
    ///
    /// The listener stays attached until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    ///
    /// # Errors
    ///
    /// Returns [`ObservableError::Poisoned`] when the lock is poisoned.
    pub fn subscribe(&self, listener: Listener<T>) -> ObservableResult<Subscription> {
        let (id, snapshot) = {
            let mut state = self
                .state
                .write()
                .map_err(|err| ObservableError::Poisoned(err.to_string()))?;
            let id = state.next_listener_id;
            state.next_listener_id = id.wrapping_add(1);
            state.listeners.push((id, Arc::clone(&listener)));
            (id, state.value.clone())
        };

        listener(&snapshot);

        let weak: Weak<RwLock<ObservableState<T>>> = Arc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            if let Some(state) = weak.upgrade()
                && let Ok(mut guard) = state.write()
            {
                guard.listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        }))
    }

    /// Returns the number of attached listeners.
    ///
    /// # Errors
    ///
    /// Returns [`ObservableError::Poisoned`] when the lock is poisoned.
    pub fn listener_count(&self) -> ObservableResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| ObservableError::Poisoned(err.to_string()))?;
        Ok(state.listeners.len())
    }
}

/// Handle that detaches a listener when dropped.
#[must_use = "dropping a subscription detaches its listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wraps a detach callback.
    pub fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Detaches the listener now.
    pub fn unsubscribe(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}
