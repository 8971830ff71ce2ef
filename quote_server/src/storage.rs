//! Append-only SQLite log of fetched quotes.
//!
//! Table layout: `cotacoes(id INTEGER PRIMARY KEY, bid TEXT)`. Rows are only ever
//! inserted. Each `QuoteStore` owns a single connection; the server opens one per
//! request and closes it when the request is done.
//!
//! An insert abandoned by its deadline keeps running on sqlx's SQLite worker until
//! SQLite gives up on the lock, so request handles use a busy timeout no longer than
//! the storage deadline.
use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use tokio::time::timeout;

use quote_common::Quote;

use crate::error::ServerError;
use crate::result::Result;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS cotacoes (id INTEGER PRIMARY KEY, bid TEXT)";
const INSERT_QUOTE: &str = "INSERT INTO cotacoes (bid) VALUES (?)";
const COUNT_QUOTES: &str = "SELECT COUNT(*) FROM cotacoes";
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the quote log.
#[derive(Debug)]
pub struct QuoteStore {
    conn: SqliteConnection,
}

impl QuoteStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: &Path) -> Result<Self> {
        Self::open_with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT).await
    }

    /// Like [`Self::open`], but waiting at most `busy_timeout` for a locked database.
    pub async fn open_with_busy_timeout(path: &Path, busy_timeout: Duration) -> Result<Self> {
        let conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout)
            .connect()
            .await?;
        Ok(Self { conn })
    }

    /// Create the quote table unless it already exists.
    pub async fn ensure_schema(&mut self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&mut self.conn).await?;
        Ok(())
    }

    /// Append one row; returns its id.
    pub async fn insert(&mut self, quote: &Quote) -> Result<i64> {
        let done = sqlx::query(INSERT_QUOTE)
            .bind(&quote.bid)
            .execute(&mut self.conn)
            .await?;
        Ok(done.last_insert_rowid())
    }

    /// Number of quotes logged so far.
    pub async fn count_quotes(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(COUNT_QUOTES)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(count)
    }

    /// Close the underlying connection cleanly.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

/// Prepare the database before the server starts accepting requests.
///
/// Any failure here is a `ServerError::Startup`.
pub async fn init_store(path: &Path) -> Result<()> {
    let mut store = QuoteStore::open(path)
        .await
        .map_err(|e| ServerError::Startup(format!("cannot open {}: {}", path.display(), e)))?;
    store
        .ensure_schema()
        .await
        .map_err(|e| ServerError::Startup(format!("cannot create quote table: {}", e)))?;
    store.close().await
}

/// Append `quote` to the log, giving up once `deadline` elapses.
pub async fn store_quote(
    store: &mut QuoteStore,
    quote: &Quote,
    deadline: Duration,
) -> Result<i64> {
    timeout(deadline, store.insert(quote))
        .await
        .map_err(|_| ServerError::DeadlineExceeded("storing quote"))?
}
