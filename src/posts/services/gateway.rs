//! Status-mapping loaders for the posts pages.

use crate::posts::{
    domain::{LoadError, Post, PostId, PostPage, PostsPage},
    ports::{PostsSource, PostsSourceError, UpstreamResponse},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

/// Loader for the posts list and single post pages.
///
/// | upstream status | `list_posts`       | `get_post`          |
/// |-----------------|--------------------|---------------------|
/// | 200             | decoded posts      | decoded post        |
/// | 404             | empty list         | [`LoadError::NotFound`] |
/// | anything else   | [`LoadError::Gateway`] with that status | same |
///
/// Transport failures and undecodable bodies become a gateway error with
/// status 502. Nothing is retried or cached.
#[derive(Clone)]
pub struct PostsGateway {
    source: Arc<dyn PostsSource>,
}

impl PostsGateway {
    /// Creates a gateway over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn PostsSource>) -> Self {
        Self { source }
    }

    /// Loads the posts list page.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Gateway`] for any upstream status other than 200
    /// or 404, and for unreachable or undecodable upstreams.
    pub async fn list_posts(&self) -> Result<PostsPage, LoadError> {
        let response = self.source.fetch_all().await.map_err(source_failure)?;
        match response.status {
            200 => Ok(PostsPage {
                posts: decode::<Vec<Post>>(&response)?,
            }),
            404 => Ok(PostsPage::default()),
            status => Err(upstream_failure(status)),
        }
    }

    /// Loads the page for post `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] when the upstream answers 404 and
    /// [`LoadError::Gateway`] for every other non-200 outcome.
    pub async fn get_post(&self, id: PostId) -> Result<PostPage, LoadError> {
        let response = self.source.fetch_one(id).await.map_err(source_failure)?;
        match response.status {
            200 => Ok(PostPage {
                post: decode::<Post>(&response)?,
            }),
            404 => Err(LoadError::NotFound),
            status => Err(upstream_failure(status)),
        }
    }
}

impl std::fmt::Debug for PostsGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsGateway").finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(response: &UpstreamResponse) -> Result<T, LoadError> {
    serde_json::from_slice(&response.body).map_err(|err| {
        warn!(error = %err, "upstream body is not the expected JSON");
        LoadError::unreachable()
    })
}

fn source_failure(err: PostsSourceError) -> LoadError {
    warn!(error = %err, "posts upstream unreachable");
    LoadError::unreachable()
}

fn upstream_failure(status: u16) -> LoadError {
    warn!(status, "posts upstream returned an error status");
    LoadError::Gateway { status }
}
