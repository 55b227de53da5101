//! Error types for post loading and addressing.

use thiserror::Error;

/// HTTP status reported when the upstream could not be reached or decoded.
pub const UNREACHABLE_UPSTREAM_STATUS: u16 = 502;

/// Page-level failure of a posts loader.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The requested post does not exist upstream.
    #[error("No such post.")]
    NotFound,

    /// The upstream answered with an unexpected status or was unusable.
    #[error("Error retrieving posts.")]
    Gateway {
        /// Status code shown on the error page.
        status: u16,
    },
}

impl LoadError {
    /// Gateway failure for an upstream that could not be reached or decoded.
    #[must_use]
    pub const fn unreachable() -> Self {
        Self::Gateway {
            status: UNREACHABLE_UPSTREAM_STATUS,
        }
    }

    /// Returns the HTTP status of the error page.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Gateway { status } => status,
        }
    }
}

/// Error returned when a path segment is not a post identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid post id: {0}")]
pub struct ParsePostIdError(pub String);
