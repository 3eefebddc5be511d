//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. `DatabasePool` holds a
//! multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERT/UPDATE/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

/// File name of the session database inside the data directory.
pub const DATABASE_FILE: &str = "sessions.db";

impl DatabasePool {
    /// Open (or create) [`DATABASE_FILE`] inside `data_dir`.
    ///
    /// The path is handed to SQLite as a filename, never parsed as a URL.
    /// Runs migrations on the writer pool before opening readers. Both
    /// pools use WAL journal mode and a 5-second busy timeout.
    pub async fn open_in(data_dir: &Path) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::new()
            .filename(data_dir.join(DATABASE_FILE))
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(base_opts.clone())
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(base_opts.read_only(true))
            .await?;

        Ok(Self { reader, writer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_tables() {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::open_in(dir.path()).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool.reader)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(table_names, vec!["chat_histories"]);
    }

    #[tokio::test]
    async fn test_pool_path_with_url_characters() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("odd ?mode=ro #dir%20");
        std::fs::create_dir_all(&data_dir).unwrap();

        let pool = DatabasePool::open_in(&data_dir).await.unwrap();
        sqlx::query(
            "INSERT INTO chat_histories (session_id, leader_name, history, created_at, updated_at) VALUES ('s', 'l', '[]', 't', 't')",
        )
        .execute(&pool.writer)
        .await
        .unwrap();

        assert!(data_dir.join(DATABASE_FILE).exists());
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::open_in(dir.path()).await.unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_pool_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        {
            let pool = DatabasePool::open_in(dir.path()).await.unwrap();
            sqlx::query(
                "INSERT INTO chat_histories (session_id, leader_name, history, created_at, updated_at) VALUES ('s', 'l', '[]', 't', 't')",
            )
            .execute(&pool.writer)
            .await
            .unwrap();
        }

        let pool = DatabasePool::open_in(dir.path()).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_histories")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }
}
