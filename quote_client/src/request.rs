//! Requesting the latest quote from the quote server.
//!
//! The whole round trip (connect, headers, body) shares one deadline. A response
//! whose `Content-Type` is not exactly `application/json` is treated as an error
//! report and its body is returned verbatim.
use std::time::Duration;

use log::debug;
use quote_common::Quote;
use quote_common::net::JSON_CONTENT_TYPE;
use reqwest::header::CONTENT_TYPE;
use tokio::time::timeout;

use crate::error::ClientError;
use crate::result::Result;

/// Fetch a quote from `url`, failing once `deadline` elapses.
pub async fn fetch_quote(url: &str, deadline: Duration) -> Result<Quote> {
    timeout(deadline, request_quote(url))
        .await
        .map_err(|_| ClientError::DeadlineExceeded(deadline))?
}

async fn request_quote(url: &str) -> Result<Quote> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.bytes().await?;
    debug!("Server answered {} with content type {:?}", status, content_type);

    if content_type != JSON_CONTENT_TYPE {
        return Err(ClientError::UnexpectedContentType(
            String::from_utf8_lossy(&body).into_owned(),
        ));
    }

    Ok(Quote::from_json(&body)?)
}
