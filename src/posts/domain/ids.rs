//! Identifier type for upstream posts.

use super::ParsePostIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of an upstream post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wraps a numeric identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl FromStr for PostId {
    type Err = ParsePostIdError;

    /// Parses a path segment made only of ASCII digits.
    ///
    /// Signs, whitespace and empty input are rejected, as are values that
    /// overflow `u64`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ParsePostIdError(value.to_owned()));
        }
        value
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParsePostIdError(value.to_owned()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
