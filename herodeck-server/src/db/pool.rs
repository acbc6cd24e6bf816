//! Database connection pool management
//!
//! Uses sqlx SqlitePool over a single database file.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Default maximum connections for the pool.
/// Kept low for a single-file store.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Schema for the hero table (idempotent)
const SCHEMA: &str = include_str!("schema.sql");

/// Open (creating if missing) the SQLite database at `path`.
///
/// # Errors
///
/// Returns an error if the file can't be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("database.db").await?;
/// ensure_schema(&pool).await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5)) // Writers wait instead of failing with SQLITE_BUSY
        .synchronous(SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Open a private in-memory database.
///
/// Every SQLite memory connection is its own database, so the pool holds
/// exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Create the hero table and its indexes if they don't exist yet.
///
/// Safe to call on every startup; existing rows are untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::info!("hero schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_pool_runs_queries() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn schema_is_idempotent_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.db");

        let pool = create_pool(&path).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO hero (name, age, secret_name) VALUES (?, ?, ?)")
            .bind("Deadpond")
            .bind(None::<i64>)
            .bind("Dive Wilson")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        // Second boot against the same file
        let pool = create_pool(&path).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hero")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }
}
