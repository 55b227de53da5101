//! In-memory user directory adapter.

mod directory;

pub use directory::{InMemoryUserDirectory, SEED_PASSWORD, SEED_USERNAME};
