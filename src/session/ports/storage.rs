//! Key-value blob storage port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueStoreResult<T> = Result<T, KeyValueStoreError>;

/// Persistent string storage owned by a single client.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the store cannot be read.
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the store cannot be
    /// written.
    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()>;

    /// Removes `key` from the store.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the store cannot be
    /// written.
    fn clear(&self, key: &str) -> KeyValueStoreResult<()>;
}

/// Errors returned by key-value store adapters.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// Backend failure.
    #[error("key-value store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
