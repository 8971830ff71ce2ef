//! Result type alias for the quote server.
use crate::error::ServerError;

/// Server-wide `Result` alias with `ServerError` as the default error.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;
