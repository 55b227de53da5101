//! Scripted in-memory posts source.

use crate::posts::{
    domain::PostId,
    ports::{PostsSource, PostsSourceError, PostsSourceResult, UpstreamResponse},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory posts source with preset responses.
///
/// The collection answers `404` and unknown ids answer `404` until a
/// response is configured. Suitable for integration tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticPostsSource {
    state: Arc<RwLock<StaticSourceState>>,
}

#[derive(Debug, Default)]
struct StaticSourceState {
    collection: Option<UpstreamResponse>,
    posts: HashMap<PostId, UpstreamResponse>,
    requests: usize,
}

impl StaticPostsSource {
    /// Creates a source with no configured responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response returned for the collection.
    ///
    /// # Errors
    ///
    /// Returns [`PostsSourceError::Transport`] when the state lock is
    /// poisoned.
    pub fn set_collection(&self, response: UpstreamResponse) -> PostsSourceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PostsSourceError::transport(std::io::Error::other(err.to_string())))?;
        state.collection = Some(response);
        Ok(())
    }

    /// Sets the response returned for post `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PostsSourceError::Transport`] when the state lock is
    /// poisoned.
    pub fn set_post(&self, id: PostId, response: UpstreamResponse) -> PostsSourceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PostsSourceError::transport(std::io::Error::other(err.to_string())))?;
        state.posts.insert(id, response);
        Ok(())
    }

    /// Returns how many fetches have been served.
    ///
    /// # Errors
    ///
    /// Returns [`PostsSourceError::Transport`] when the state lock is
    /// poisoned.
    pub fn request_count(&self) -> PostsSourceResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| PostsSourceError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.requests)
    }

    fn serve(
        &self,
        pick: impl FnOnce(&StaticSourceState) -> Option<UpstreamResponse>,
    ) -> PostsSourceResult<UpstreamResponse> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PostsSourceError::transport(std::io::Error::other(err.to_string())))?;
        state.requests = state.requests.saturating_add(1);
        Ok(pick(&state).unwrap_or_else(|| UpstreamResponse::status_only(404)))
    }
}

#[async_trait]
impl PostsSource for StaticPostsSource {
    async fn fetch_all(&self) -> PostsSourceResult<UpstreamResponse> {
        self.serve(|state| state.collection.clone())
    }

    async fn fetch_one(&self, id: PostId) -> PostsSourceResult<UpstreamResponse> {
        self.serve(|state| state.posts.get(&id).cloned())
    }
}
