//! Configuration built once at startup and shared with every request.
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::Args;

/// Where the server reads quotes from and writes them to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Pricing API URL.
    pub upstream_url: String,
    /// SQLite file opened by each request.
    pub db_path: PathBuf,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        ServerConfig {
            upstream_url: args.upstream_url.clone(),
            db_path: args.db_path.clone(),
        }
    }
}

/// Handler state; cheap to clone per request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wrap a configuration for sharing across requests.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
