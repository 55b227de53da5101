//! Port contracts for reaching the upstream posts API.

pub mod source;

#[cfg(test)]
pub use source::MockPostsSource;
pub use source::{PostsSource, PostsSourceError, PostsSourceResult, UpstreamResponse};
