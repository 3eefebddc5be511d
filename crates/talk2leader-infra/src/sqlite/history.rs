//! SQLite chat history store.
//!
//! Implements `HistoryStore` from `talk2leader-core` using sqlx with split
//! read/write pools. Each (session, persona) row holds the whole turn
//! sequence as JSON text.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use uuid::Uuid;

use talk2leader_core::history::store::HistoryStore;
use talk2leader_types::chat::ChatHistory;
use talk2leader_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `HistoryStore`.
#[derive(Clone)]
pub struct SqliteHistoryStore {
    pool: DatabasePool,
}

impl SqliteHistoryStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Fixed-width UTC timestamps, so SQL string comparison orders them correctly.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl HistoryStore for SqliteHistoryStore {
    async fn get(&self, session_id: &Uuid, leader: &str) -> Result<Option<ChatHistory>, RepositoryError> {
        let row = sqlx::query("SELECT history FROM chat_histories WHERE session_id = ? AND leader_name = ?")
            .bind(session_id.to_string())
            .bind(leader)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let history_str: String = row
                    .try_get("history")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                let history: ChatHistory = serde_json::from_str(&history_str)
                    .map_err(|e| RepositoryError::Serialization(format!("invalid history JSON: {e}")))?;
                Ok(Some(history))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, session_id: &Uuid, leader: &str, history: &ChatHistory) -> Result<(), RepositoryError> {
        let now = format_datetime(&Utc::now());
        let history_str = serde_json::to_string(history)
            .map_err(|e| RepositoryError::Serialization(format!("failed to serialize history: {e}")))?;

        sqlx::query(
            r#"INSERT INTO chat_histories (session_id, leader_name, history, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT (session_id, leader_name) DO UPDATE SET history = excluded.history, updated_at = excluded.updated_at"#,
        )
        .bind(session_id.to_string())
        .bind(leader)
        .bind(&history_str)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, session_id: &Uuid, leader: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM chat_histories WHERE session_id = ? AND leader_name = ?")
            .bind(session_id.to_string())
            .bind(leader)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_updated_before(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM chat_histories WHERE updated_at < ?")
            .bind(format_datetime(&cutoff))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
