//! Shared state handed to every request handler.

use super::pages::PageRenderer;
use crate::config::Config;
use crate::posts::{adapters::HttpPostsSource, ports::PostsSourceError, services::PostsGateway};
use crate::user::{adapters::memory::InMemoryUserDirectory, services::AccountService};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Account service wired to the process-lifetime directory.
pub type Accounts = AccountService<InMemoryUserDirectory, DefaultClock>;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A page template failed to compile.
    #[error("failed to compile templates: {0}")]
    Templates(#[from] minijinja::Error),

    /// The upstream client could not be built.
    #[error(transparent)]
    Upstream(#[from] PostsSourceError),
}

/// Services shared across requests.
#[derive(Clone)]
pub struct AppState {
    accounts: Arc<Accounts>,
    posts: PostsGateway,
    pages: Arc<PageRenderer>,
}

impl AppState {
    /// Creates state from already-built services.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Templates`] when the page templates fail to
    /// compile.
    pub fn new(accounts: Accounts, posts: PostsGateway) -> Result<Self, StartupError> {
        Ok(Self {
            accounts: Arc::new(accounts),
            posts,
            pages: Arc::new(PageRenderer::new()?),
        })
    }

    /// Builds the production wiring: a seeded in-memory directory and the
    /// HTTP posts source.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] when templates or the upstream client cannot
    /// be built.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let clock = Arc::new(DefaultClock);
        let directory = Arc::new(InMemoryUserDirectory::seeded(&*clock));
        let source = HttpPostsSource::new(config.posts_endpoint.clone(), config.upstream_timeout())?;
        Self::new(
            AccountService::new(directory, clock),
            PostsGateway::new(Arc::new(source)),
        )
    }

    /// Returns the account service.
    #[must_use]
    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    /// Returns the posts gateway.
    #[must_use]
    pub const fn posts(&self) -> &PostsGateway {
        &self.posts
    }

    /// Returns the page renderer.
    #[must_use]
    pub fn pages(&self) -> &PageRenderer {
        &self.pages
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("posts", &self.posts)
            .finish_non_exhaustive()
    }
}
