//! Infrastructure failures raised while handling a request.

use crate::session::services::SessionError;
use crate::user::ports::UserDirectoryError;
use axum::http::{StatusCode, header::InvalidHeaderValue};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Request failure that is not the client's fault.
///
/// Validation failures and upstream errors are rendered as pages; this type
/// covers what remains and always answers `500`.
#[derive(Debug, Error)]
pub enum WebError {
    /// The client session could not be loaded or saved.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The user directory is unavailable.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),

    /// A page template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    /// A response header could not be encoded.
    #[error("invalid response header: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
