//! Outbound call to the pricing API.
//!
//! A fresh `reqwest::Client` is built per call; nothing is pooled between requests.
use std::time::Duration;

use log::debug;
use quote_common::Quote;
use tokio::time::timeout;

use crate::error::ServerError;
use crate::model::upstream::UpstreamEnvelope;
use crate::result::Result;

const USER_AGENT: &str = concat!("quote_server/", env!("CARGO_PKG_VERSION"));

/// Fetch the latest quote from `url`, giving up once `deadline` elapses.
///
/// Network failures, non-2xx statuses, undecodable bodies and an expired deadline
/// all surface as `ServerError::Upstream`.
pub async fn get_quote(url: &str, deadline: Duration) -> Result<Quote> {
    match timeout(deadline, request_quote(url)).await {
        Ok(result) => result,
        Err(_) => Err(ServerError::Upstream(format!(
            "request to {} exceeded its {}ms deadline",
            url,
            deadline.as_millis()
        ))),
    }
}

async fn request_quote(url: &str) -> Result<Quote> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    debug!("Requesting quote from {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServerError::Upstream(format!(
            "HTTP error: {} from {}",
            status, url
        )));
    }

    let body = response.bytes().await?;
    UpstreamEnvelope::quote_from_json(&body)
        .map_err(|e| ServerError::Upstream(format!("invalid payload from {}: {}", url, e)))
}
