//! Request-scoped key-value store backed by HTTP cookies.
//!
//! A [`CookieJarStore`] is built from the request's `Cookie` header and
//! records every write. After the handler runs, the recorded writes are
//! turned into `Set-Cookie` header values for the response.

use crate::session::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

#[derive(Debug, Default)]
struct CookieJarState {
    values: HashMap<String, String>,
    changes: BTreeMap<String, Option<String>>,
}

/// Key-value store over the cookies of one HTTP exchange.
#[derive(Debug, Default)]
pub struct CookieJarStore {
    state: RwLock<CookieJarState>,
}

impl CookieJarStore {
    /// Creates an empty jar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `Cookie` request header.
    ///
    /// Pairs without `=` and values that are not valid percent-encoded UTF-8
    /// are skipped. When a name repeats, the first occurrence wins.
    #[must_use]
    pub fn from_header(header: Option<&str>) -> Self {
        let mut values = HashMap::new();
        for pair in header.unwrap_or_default().split(';') {
            let Some((name, raw_value)) = pair.trim().split_once('=') else {
                continue;
            };
            let Ok(value) = urlencoding::decode(raw_value.trim()) else {
                continue;
            };
            values
                .entry(name.trim().to_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self {
            state: RwLock::new(CookieJarState {
                values,
                changes: BTreeMap::new(),
            }),
        }
    }

    /// Returns `Set-Cookie` header values for every key written since the
    /// jar was created, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the jar lock is poisoned.
    pub fn set_cookie_headers(&self) -> KeyValueStoreResult<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueStoreError::backend(std::io::Error::other(err.to_string())))?;
        let headers = state
            .changes
            .iter()
            .map(|(name, change)| match change {
                Some(value) => format!(
                    "{name}={}; {COOKIE_ATTRIBUTES}",
                    urlencoding::encode(value)
                ),
                None => format!("{name}=; {COOKIE_ATTRIBUTES}; Max-Age=0"),
            })
            .collect();
        Ok(headers)
    }
}

impl KeyValueStore for CookieJarStore {
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueStoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueStoreError::backend(std::io::Error::other(err.to_string())))?;
        state.values.insert(key.to_owned(), value.to_owned());
        state
            .changes
            .insert(key.to_owned(), Some(value.to_owned()));
        Ok(())
    }

    fn clear(&self, key: &str) -> KeyValueStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueStoreError::backend(std::io::Error::other(err.to_string())))?;
        state.values.remove(key);
        state.changes.insert(key.to_owned(), None);
        Ok(())
    }
}
