//! Client-side user session for postdesk.
//!
//! The session remembers which user signed in on a given client. It is read
//! from and written back to a [`ports::KeyValueStore`], so the same logic runs
//! against a browser-style blob store, a request cookie jar, or plain memory.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
