//! User registration and login for postdesk.
//!
//! This module keeps the process-wide list of registered accounts and the
//! form actions that read and extend it. The list lives in an injected
//! [`ports::UserDirectory`] rather than a global, and credentials are kept as
//! salted digests. The module follows hexagonal architecture:
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
