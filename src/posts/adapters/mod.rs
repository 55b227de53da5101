//! Adapter implementations for the posts source port.

pub mod http;
pub mod memory;

pub use http::{DEFAULT_UPSTREAM_TIMEOUT, HttpPostsSource};
pub use memory::StaticPostsSource;
