//! Domain model for registered users and form-action outcomes.
//!
//! Users carry a salted password digest and a registration timestamp. Action
//! failures are plain data with a fixed HTTP status, so the rendering layer
//! can show them inline.

mod error;
mod outcome;
mod password;
mod user;

pub use error::ActionFailure;
pub use outcome::ActionOutcome;
pub use password::PasswordDigest;
pub use user::{User, UserSummary};
