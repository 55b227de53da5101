//! Application services for loading posts.

mod gateway;

pub use gateway::PostsGateway;
