//! History service: read / write / delete of a persona's turns.

use chrono::{Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use talk2leader_types::chat::ChatHistory;
use talk2leader_types::error::RepositoryError;

use super::store::HistoryStore;

/// Session-scoped chat history operations.
///
/// Generic over `HistoryStore` so the core never depends on the SQLite
/// implementation.
pub struct HistoryService<S: HistoryStore> {
    store: S,
}

impl<S: HistoryStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read a persona's turns; an absent entry reads as an empty sequence.
    ///
    /// Reading never creates an entry.
    pub async fn read(&self, session_id: &Uuid, leader: &str) -> Result<ChatHistory, RepositoryError> {
        Ok(self.store.get(session_id, leader).await?.unwrap_or_default())
    }

    /// Replace a persona's turns with `history` (no merge, no append).
    pub async fn write(
        &self,
        session_id: &Uuid,
        leader: &str,
        history: &ChatHistory,
    ) -> Result<(), RepositoryError> {
        self.store.set(session_id, leader, history).await?;
        debug!(session_id = %session_id, leader = %leader, turns = history.len(), "History replaced");
        Ok(())
    }

    /// Remove a persona's entry. Deleting an absent entry is a no-op.
    pub async fn delete(&self, session_id: &Uuid, leader: &str) -> Result<(), RepositoryError> {
        let removed = self.store.delete(session_id, leader).await?;
        debug!(session_id = %session_id, leader = %leader, removed, "History delete");
        Ok(())
    }

    /// Purge histories not updated within `ttl_days`.
    pub async fn purge_expired(&self, ttl_days: u32) -> Result<u64, RepositoryError> {
        let cutoff = Utc::now() - Duration::days(i64::from(ttl_days));
        let removed = self.store.purge_updated_before(cutoff).await?;
        if removed > 0 {
            info!(removed, ttl_days, "Purged expired chat histories");
        }
        Ok(removed)
    }
}
