//! History store trait.
//!
//! Defines the two-level key-value interface for chat histories.
//! Implementations live in talk2leader-infra.

use chrono::{DateTime, Utc};
use talk2leader_types::chat::ChatHistory;
use talk2leader_types::error::RepositoryError;
use uuid::Uuid;

/// Trait for session-scoped chat history storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait HistoryStore: Send + Sync {
    /// Get the history for a persona. Returns None if no entry exists.
    fn get(
        &self,
        session_id: &Uuid,
        leader: &str,
    ) -> impl std::future::Future<Output = Result<Option<ChatHistory>, RepositoryError>> + Send;

    /// Replace the history for a persona (upsert).
    fn set(
        &self,
        session_id: &Uuid,
        leader: &str,
        history: &ChatHistory,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a persona's entry. Returns whether an entry was removed.
    fn delete(
        &self,
        session_id: &Uuid,
        leader: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// Remove every entry last updated before `cutoff`. Returns the count removed.
    fn purge_updated_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
