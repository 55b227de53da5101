//! HTTP adapter for the upstream posts API.

use crate::posts::{
    domain::PostId,
    ports::{PostsSource, PostsSourceError, PostsSourceResult, UpstreamResponse},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Request timeout applied when none is configured.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts source that issues `GET` requests with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpPostsSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPostsSource {
    /// Creates a source for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PostsSourceError::Configuration`] when the HTTP client
    /// cannot be built.
    pub fn new(endpoint: Url, timeout: Duration) -> PostsSourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PostsSourceError::configuration)?;
        Ok(Self { client, endpoint })
    }

    /// Returns the collection endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the URL of a single post: the endpoint followed by `/{id}`.
    #[must_use]
    pub fn post_url(&self, id: PostId) -> String {
        format!("{}/{id}", self.endpoint.as_str().trim_end_matches('/'))
    }

    async fn get(&self, url: &str) -> PostsSourceResult<UpstreamResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PostsSourceError::transport)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(PostsSourceError::transport)?;
        debug!(%url, status, bytes = body.len(), "upstream responded");
        Ok(UpstreamResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl PostsSource for HttpPostsSource {
    async fn fetch_all(&self) -> PostsSourceResult<UpstreamResponse> {
        self.get(self.endpoint.as_str()).await
    }

    async fn fetch_one(&self, id: PostId) -> PostsSourceResult<UpstreamResponse> {
        self.get(&self.post_url(id)).await
    }
}
