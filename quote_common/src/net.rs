//! Shared networking constants and helpers used by client and server.
//!
//! Deadlines are fixed; neither binary exposes them as flags.
use std::time::Duration;

/// TCP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the latest USD-BRL quote.
pub const QUOTE_ROUTE: &str = "/cotacao";
/// Upstream pricing API returning the latest USD-BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Content type of a successful quote response.
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type of a plaintext error response.
pub const TEXT_CONTENT_TYPE: &str = "application/text";

/// Server side: budget for the upstream API call.
pub const UPSTREAM_DEADLINE: Duration = Duration::from_millis(200);
/// Server side: budget for persisting a quote.
pub const STORAGE_DEADLINE: Duration = Duration::from_millis(10);
/// Client side: budget for the whole round trip to the server.
pub const CLIENT_DEADLINE: Duration = Duration::from_millis(300);

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default URL the client requests.
pub fn default_server_url() -> String {
    format!("http://{}{}", addr("localhost", SERVER_PORT), QUOTE_ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_points_at_local_server() {
        assert_eq!(default_server_url(), "http://localhost:8080/cotacao");
    }

    #[test]
    fn storage_deadline_is_shorter_than_upstream() {
        assert!(STORAGE_DEADLINE < UPSTREAM_DEADLINE);
        assert!(UPSTREAM_DEADLINE < CLIENT_DEADLINE);
    }
}
