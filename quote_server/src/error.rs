//! Error types used across the quote server.
//!
//! Only `Upstream` ever reaches an HTTP caller. Storage failures are logged by the
//! handler and dropped; startup failures end the process before it serves.
use std::io;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use quote_common::net::TEXT_CONTENT_TYPE;
use thiserror::Error;

/// Unified error type for the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The pricing API could not be reached, answered non-2xx, sent an
    /// undecodable body, or missed its deadline.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// SQLite rejected an open, schema or insert statement.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// A storage operation did not finish in time; holds the operation name.
    #[error("Deadline exceeded while {0}")]
    DeadlineExceeded(&'static str),

    /// The server could not prepare its storage or bind its socket.
    #[error("Startup error: {0}")]
    Startup(String),

    /// I/O error from the listening socket.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        ServerError::Upstream(err.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_becomes_plaintext_500() {
        let response = ServerError::Upstream("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            TEXT_CONTENT_TYPE
        );
    }
}
