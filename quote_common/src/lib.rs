//!
//! Common types and constants shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — `QuoteError`, raised when a quote payload is malformed.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` model exchanged between server and client.
//! - `net` — endpoint, port and deadline constants both sides agree on.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
