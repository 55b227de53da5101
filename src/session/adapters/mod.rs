//! Adapter implementations for the key-value store port.
//!
//! - [`memory::InMemoryKeyValueStore`]: map-backed store for tests and local
//!   clients.
//! - [`detached::DetachedKeyValueStore`]: no-op store used when no client
//!   storage is reachable.
//! - [`cookie::CookieJarStore`]: request-scoped store over HTTP cookies.

pub mod cookie;
pub mod detached;
pub mod memory;

pub use cookie::CookieJarStore;
pub use detached::DetachedKeyValueStore;
pub use memory::InMemoryKeyValueStore;
