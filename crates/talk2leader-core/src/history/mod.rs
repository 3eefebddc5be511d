//! Session-scoped chat history.
//!
//! Histories are keyed by (session id, persona name). Each persona entry is
//! either absent or present with N turns; writes replace the whole sequence.

pub mod service;
pub mod store;
