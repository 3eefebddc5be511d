//! Infrastructure layer for Talk2Leader.
//!
//! Contains implementations of the ports defined in `talk2leader-core`:
//! the Gemini generative-text client, the Wikipedia biography client, the
//! SQLite history store, plus session cookie signing and config loading.

pub mod config;
pub mod crypto;
pub mod llm;
pub mod sqlite;
pub mod wikipedia;
