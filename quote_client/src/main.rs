//! Quote Client — asks the quote server for the latest USD-BRL bid and writes it to a
//! report file as `Dólar: <bid>`.
//!
//! The request shares a single 300ms deadline across the full round trip. Any failure
//! (transport, deadline, non-JSON response, undecodable body, file write) is logged
//! and ends the process with status 1; no report is written in that case. When the
//! server answers with something other than `application/json`, its body is logged
//! verbatim as the error message.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
#![warn(missing_docs)]
mod args;
mod error;
mod report;
mod request;
mod result;

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};
use quote_common::net::CLIENT_DEADLINE;

use crate::args::Args;
use crate::result::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();
    let args = Args::parse();
    let output = normalize_path(&args.output);

    if let Err(e) = run(&args.url, &output).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Fetch one quote from `url` and save the report to `output`.
async fn run(url: &str, output: &Path) -> Result<()> {
    info!("Requesting quote from {}", url);
    let quote = request::fetch_quote(url, CLIENT_DEADLINE).await?;
    report::write_report(output, &quote)?;
    info!("Quote {} saved to {}", quote.bid, output.display());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn json_response_produces_report() {
        let server = mock_server(
            ResponseTemplate::new(200).set_body_raw(r#"{"bid":"5.43"}"#, "application/json"),
        )
        .await;
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");

        run(&format!("{}/cotacao", server.uri()), &output).await.unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.43");
    }

    #[tokio::test]
    async fn non_json_response_writes_no_report() {
        let server = mock_server(
            ResponseTemplate::new(500)
                .set_body_raw("request exceeded its deadline", "application/text"),
        )
        .await;
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");

        let err = run(&format!("{}/cotacao", server.uri()), &output).await.unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedContentType(_)));
        assert_eq!(err.to_string(), "request exceeded its deadline");
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn slow_server_writes_no_report() {
        let server = mock_server(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"bid":"5.43"}"#, "application/json")
                .set_delay(CLIENT_DEADLINE * 3),
        )
        .await;
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");

        let err = run(&format!("{}/cotacao", server.uri()), &output).await.unwrap_err();
        assert!(matches!(err, ClientError::DeadlineExceeded(_)));
        assert!(!output.exists());
    }

    #[test]
    fn normalize_path_strips_quotes_and_whitespace() {
        assert_eq!(normalize_path("  \"out/cotacao.txt\" "), PathBuf::from("out/cotacao.txt"));
        assert_eq!(normalize_path("cotacao.txt"), PathBuf::from("cotacao.txt"));
    }
}
