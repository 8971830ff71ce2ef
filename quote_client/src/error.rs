//! Error types used across the Quote Client.
//!
//! Every variant is fatal: `main` logs it and exits.
use std::io;
use std::time::Duration;

use quote_common::QuoteError;
use thiserror::Error;

/// Unified error type for the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The round trip did not finish within its budget.
    #[error("Request exceeded its {}ms deadline", .0.as_millis())]
    DeadlineExceeded(Duration),

    /// The server did not answer with JSON; holds the raw response body.
    #[error("{0}")]
    UnexpectedContentType(String),

    /// The JSON body was not a valid quote.
    #[error("Decode error: {0}")]
    Decode(#[from] QuoteError),

    /// Writing the report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
