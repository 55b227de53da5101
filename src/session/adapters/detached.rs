//! Store used when no client storage is reachable.

use crate::session::ports::{KeyValueStore, KeyValueStoreResult};

/// Key-value store that reads nothing and discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedKeyValueStore;

impl KeyValueStore for DetachedKeyValueStore {
    fn get(&self, _key: &str) -> KeyValueStoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> KeyValueStoreResult<()> {
        Ok(())
    }

    fn clear(&self, _key: &str) -> KeyValueStoreResult<()> {
        Ok(())
    }
}
