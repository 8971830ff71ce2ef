//! Command-line arguments for the Quote Server.
//!
//! Every flag defaults to the production value, so running the binary bare serves
//! `GET /cotacao` on port 8080 backed by `./cotacoes.db`.
use std::path::PathBuf;

use clap::Parser;
use quote_common::net::{SERVER_PORT, UPSTREAM_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interface to bind the HTTP listener to.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// SQLite database file holding the quote log.
    #[clap(long, default_value = "cotacoes.db")]
    pub db_path: PathBuf,

    /// Pricing API returning the latest USD-BRL quote.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,
}
