//! Error type shared between client and server.
//!
//! The `QuoteError` enum covers the ways a quote payload can be unusable,
//! whichever side of the wire it was read on.
use thiserror::Error;

/// Failure to build a `Quote` from untrusted input.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The bid field was present but empty.
    #[error("Quote has an empty bid")]
    EmptyBid,

    /// Failure while decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
