//! HTTP route table of the quote server.
use axum::{Router, routing::get};
use quote_common::net::QUOTE_ROUTE;

use crate::handler;
use crate::state::AppState;

/// Route table for the quote server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_ROUTE, get(handler::get_cotacao))
        .with_state(state)
}
