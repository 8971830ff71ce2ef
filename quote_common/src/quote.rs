//! Quote data model and JSON decoding helpers.
//!
//! A `Quote` carries the USD-BRL bid exactly as the upstream source formatted it.
//! The server returns it as `{"bid": "..."}` and the client decodes the same shape.
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Latest bid for the USD-BRL pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Bid price kept as text so decimals are never reformatted.
    pub bid: String,
}

impl Quote {
    /// Creates a quote, rejecting a blank bid.
    pub fn new(bid: impl Into<String>) -> Result<Self> {
        let bid = bid.into();
        if bid.trim().is_empty() {
            return Err(QuoteError::EmptyBid);
        }
        Ok(Quote { bid })
    }

    /// Decode a quote from JSON bytes and validate it.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let raw: Quote = serde_json::from_slice(bytes)?;
        Self::new(raw.bid)
    }

    /// Checks a quote that was deserialized as part of a larger payload.
    pub fn validated(self) -> Result<Self> {
        Self::new(self.bid)
    }
}
