//! Opaque post values and the page payloads built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post as returned by the upstream API, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(Value);

impl Post {
    /// Wraps a JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Data for the posts list page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostsPage {
    /// Posts in upstream order.
    pub posts: Vec<Post>,
}

/// Data for the single post page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPage {
    /// The requested post.
    pub post: Post,
}
