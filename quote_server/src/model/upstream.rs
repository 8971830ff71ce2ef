//! Response envelope of the upstream pricing API.
//!
//! The API nests each pair under its code, e.g.
//! `{"USDBRL": {"code": "USD", "codein": "BRL", "bid": "5.4312", ...}}`.
//! Only `bid` is kept; every other field is ignored.

use quote_common::{Quote, QuoteError};
use serde::Deserialize;

/// Top-level object returned for `/json/last/USD-BRL`.
#[derive(Debug, Deserialize)]
pub struct UpstreamEnvelope {
    /// Quote for the USD-BRL pair.
    #[serde(rename = "USDBRL")]
    pub usd_brl: Quote,
}

impl UpstreamEnvelope {
    /// Decode the envelope and return its validated quote.
    pub fn quote_from_json(bytes: &[u8]) -> Result<Quote, QuoteError> {
        let envelope: UpstreamEnvelope = serde_json::from_slice(bytes)?;
        envelope.usd_brl.validated()
    }
}
