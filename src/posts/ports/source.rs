//! Raw upstream fetch port for posts.

use crate::posts::domain::PostId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for upstream fetches.
pub type PostsSourceResult<T> = Result<T, PostsSourceError>;

/// Status and body of one upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a response with an empty body.
    #[must_use]
    pub const fn status_only(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// Upstream posts API contract.
///
/// Implementations perform exactly one request per call and report whatever
/// status the upstream returned. Status interpretation belongs to the
/// gateway service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsSource: Send + Sync {
    /// Fetches the post collection (`GET {endpoint}`).
    ///
    /// # Errors
    ///
    /// Returns [`PostsSourceError::Transport`] when no response was received.
    async fn fetch_all(&self) -> PostsSourceResult<UpstreamResponse>;

    /// Fetches one post (`GET {endpoint}/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`PostsSourceError::Transport`] when no response was received.
    async fn fetch_one(&self, id: PostId) -> PostsSourceResult<UpstreamResponse>;
}

/// Errors returned by posts source adapters.
#[derive(Debug, Clone, Error)]
pub enum PostsSourceError {
    /// The request failed before a response arrived.
    #[error("upstream transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The adapter could not be constructed.
    #[error("invalid upstream configuration: {0}")]
    Configuration(Arc<dyn std::error::Error + Send + Sync>),
}

impl PostsSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a configuration error.
    pub fn configuration(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Configuration(Arc::new(err))
    }
}
