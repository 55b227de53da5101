//! Domain model for the client session state machine.

mod state;

pub use state::{ClientSession, SESSION_KEY};
