//! Pre-render route guards.

use crate::session::{ports::KeyValueStore, services::ClientUserSession, services::SessionResult};

/// Page that signed-in clients are sent to instead of the login form.
pub const AUTHENTICATED_HOME: &str = "/user";

/// Decision taken by a guard before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue with normal handling.
    Proceed,
    /// Stop and answer `302 Found` with this location.
    Redirect {
        /// Target of the redirect.
        location: &'static str,
    },
}

/// Keeps signed-in clients away from the login page.
///
/// # Errors
///
/// Returns a session error when the session state cannot be read.
pub fn login_page_guard<S>(session: &ClientUserSession<S>) -> SessionResult<GuardOutcome>
where
    S: KeyValueStore,
{
    if session.exists()? {
        return Ok(GuardOutcome::Redirect {
            location: AUTHENTICATED_HOME,
        });
    }
    Ok(GuardOutcome::Proceed)
}
