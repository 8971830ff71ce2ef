//! USD-BRL quote HTTP server.
//!
//! Serves `GET /cotacao`. Each request fetches the latest bid from the upstream
//! pricing API, appends it to a local SQLite log on a best-effort basis, and answers
//! with `{"bid": "..."}`. The building blocks:
//!
//! - `fetcher` — the outbound pricing API call, bounded by `UPSTREAM_DEADLINE`.
//! - `storage` — the append-only `cotacoes` table, writes bounded by `STORAGE_DEADLINE`.
//! - `handler` — glues both together per request; only upstream failures become a 500.
//! - `router` / `state` — route table and the configuration handed to handlers.
//!
//! Startup creates the table if needed; failing to do so, or to bind the listener,
//! ends the process with a non-zero status. Ctrl+C stops the server after in-flight
//! requests finish.
#![warn(missing_docs)]
use clap::Parser;
use log::{error, info};
use quote_common::net::addr;
use tokio::net::TcpListener;

use crate::args::Args;
use crate::error::ServerError;
use crate::result::Result;
use crate::router::create_router;
use crate::state::{AppState, ServerConfig};

mod args;
mod error;
mod fetcher;
mod handler;
pub mod model;
mod result;
mod router;
mod state;
mod storage;

#[tokio::main]
async fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(&args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = ServerConfig::from(args);

    storage::init_store(&config.db_path).await?;
    info!("Quote log ready at {}", config.db_path.display());

    let bind_addr = addr(&args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Startup(format!("cannot bind {}: {}", bind_addr, e)))?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
