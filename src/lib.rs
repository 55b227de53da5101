//! Postdesk: a small posts viewer with user registration.
//!
//! The crate serves a list of posts proxied from an external JSON API,
//! single post pages, and a minimal account flow backed by an in-process
//! user directory.
//!
//! # Architecture
//!
//! Postdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, cookies, HTTP)
//!
//! # Modules
//!
//! - [`observable`]: Shared value cell with change subscriptions
//! - [`user`]: User directory, password checks, login and registration
//! - [`session`]: Client-side record of the signed-in user
//! - [`posts`]: Upstream posts gateway
//! - [`web`]: HTTP routes and page rendering
//! - [`config`] and [`telemetry`]: Process configuration and logging

pub mod config;
pub mod observable;
pub mod posts;
pub mod session;
pub mod telemetry;
pub mod user;
pub mod web;
