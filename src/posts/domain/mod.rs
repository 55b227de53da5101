//! Domain model for proxied posts.
//!
//! Posts are opaque JSON owned by the upstream API. The domain only knows
//! how to address them and how a load can fail.

mod error;
mod ids;
mod post;

pub use error::{LoadError, ParsePostIdError};
pub use ids::PostId;
pub use post::{Post, PostPage, PostsPage};
