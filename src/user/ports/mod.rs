//! Port contracts for the user directory.
//!
//! Ports define infrastructure-agnostic interfaces used by account services.

pub mod directory;

pub use directory::{DirectoryListener, UserDirectory, UserDirectoryError, UserDirectoryResult};
