//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_common::net::default_server_url;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint of the server.
    #[clap(long, default_value_t = default_server_url())]
    pub url: String,

    /// File the report line is written to (overwritten on every run).
    #[clap(long, default_value = "cotacao.txt")]
    pub output: String,
}
