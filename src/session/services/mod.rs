//! Application services for the client session.

mod client_session;

pub use client_session::{ClientUserSession, SessionError, SessionResult};
