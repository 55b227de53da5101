//! Server configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables and then to built-in defaults.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Posts API used when `POSTS_ENDPOINT` is not set.
pub const DEFAULT_POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// JSON when stdout is not a terminal, text otherwise.
    #[default]
    Auto,
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration for the `postdesk` server.
#[derive(Debug, Clone, Parser)]
#[command(name = "postdesk", version, about = "Posts viewer with user registration")]
pub struct Config {
    /// Address to listen on.
    #[arg(long = "listen", env = "POSTDESK_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen_addr: SocketAddr,

    /// Collection endpoint of the upstream posts API.
    #[arg(
        long,
        env = "POSTS_ENDPOINT",
        default_value = DEFAULT_POSTS_ENDPOINT,
        value_parser = parse_endpoint
    )]
    pub posts_endpoint: Url,

    /// Upstream request timeout in seconds.
    #[arg(
        long = "upstream-timeout-secs",
        env = "POSTDESK_UPSTREAM_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,

    /// Log output format.
    #[arg(long, env = "POSTDESK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Auto)]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the upstream request timeout.
    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

/// Errors raised while validating configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint is not a URL.
    #[error("invalid posts endpoint '{value}': {reason}")]
    InvalidEndpoint {
        /// Rejected input.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The endpoint uses a scheme other than http or https.
    #[error("posts endpoint must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Parses an absolute `http` or `https` endpoint URL.
///
/// # Errors
///
/// Returns [`ConfigError`] when `value` is not an absolute http(s) URL.
pub fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|err| ConfigError::InvalidEndpoint {
        value: value.to_owned(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_owned())),
    }
}
