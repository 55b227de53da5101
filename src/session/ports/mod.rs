//! Port contracts for client-side session storage.

pub mod storage;

pub use storage::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};
