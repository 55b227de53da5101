//! Serializable result of a form action.

use super::{ActionFailure, UserSummary};
use serde::Serialize;

/// Data handed to the rendering layer after a login or registration attempt.
///
/// Serializes to `{"success": true, "user": {"username": ...}}` or
/// `{"status": 400, "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionOutcome {
    /// The action succeeded for `user`.
    Success {
        /// Always `true`.
        success: bool,
        /// The affected account.
        user: UserSummary,
    },
    /// The action was rejected.
    Failure {
        /// HTTP status of the failure.
        status: u16,
        /// Message shown next to the form.
        message: String,
    },
}

impl ActionOutcome {
    /// Builds a success outcome for `user`.
    #[must_use]
    pub const fn success(user: UserSummary) -> Self {
        Self::Success {
            success: true,
            user,
        }
    }

    /// Returns the HTTP status the response should carry.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::Failure { status, .. } => *status,
        }
    }
}

impl From<ActionFailure> for ActionOutcome {
    fn from(failure: ActionFailure) -> Self {
        Self::Failure {
            status: failure.status(),
            message: failure.to_string(),
        }
    }
}
