//! `GET /cotacao`: fetch, store best-effort, answer.
//!
//! Two independent deadlines govern a request. The upstream fetch gets
//! `UPSTREAM_DEADLINE` and decides the response. The storage write gets the shorter
//! `STORAGE_DEADLINE` and never changes the response. Both live inside the handler
//! future, so a client hanging up drops them together.
//!
//! After a failed write the store handle is dropped, not closed: closing waits for
//! sqlx's worker to finish the abandoned insert.
use axum::Json;
use axum::extract::State;
use log::{debug, error, info, warn};
use quote_common::Quote;
use quote_common::net::{STORAGE_DEADLINE, UPSTREAM_DEADLINE};

use crate::fetcher;
use crate::result::Result;
use crate::state::AppState;
use crate::storage::{self, QuoteStore};

/// Serve the latest USD-BRL quote as `{"bid": "..."}`.
pub async fn get_cotacao(State(state): State<AppState>) -> Result<Json<Quote>> {
    let config = &state.config;

    let opened = QuoteStore::open_with_busy_timeout(&config.db_path, STORAGE_DEADLINE).await;
    let store = match opened {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("Failed to open quote store {}: {}", config.db_path.display(), e);
            None
        }
    };

    let quote = match fetcher::get_quote(&config.upstream_url, UPSTREAM_DEADLINE).await {
        Ok(quote) => quote,
        Err(e) => {
            error!("Failed to fetch quote: {}", e);
            release(store).await;
            return Err(e);
        }
    };

    if let Some(mut store) = store {
        match storage::store_quote(&mut store, &quote, STORAGE_DEADLINE).await {
            Ok(id) => {
                debug!("Stored quote {} as row {}", quote.bid, id);
                release(Some(store)).await;
            }
            Err(e) => {
                warn!("Failed to store quote {}: {}", quote.bid, e);
                drop(store);
            }
        }
    }

    info!("Served quote: {}", quote.bid);
    Ok(Json(quote))
}

async fn release(store: Option<QuoteStore>) {
    if let Some(store) = store {
        if let Err(e) = store.close().await {
            warn!("Failed to close quote store: {}", e);
        }
    }
}
