//! Shared domain types for Talk2Leader.
//!
//! This crate contains the types exchanged between the layers of the
//! application: leader biographies, chat turns and replies, generative
//! model requests, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod leader;
pub mod llm;
