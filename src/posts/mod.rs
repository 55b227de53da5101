//! Posts proxied from an external HTTP API.
//!
//! The [`services::PostsGateway`] fetches the post list or a single post
//! through a [`ports::PostsSource`] and turns the upstream status code into a
//! page outcome: data, an empty list, a not-found error, or a gateway error.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
