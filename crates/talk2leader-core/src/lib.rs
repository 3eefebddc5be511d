//! Business logic and port trait definitions for Talk2Leader.
//!
//! This crate defines the "ports" (provider and store traits) that the
//! infrastructure layer implements, plus the persona prompt builder and the
//! services the HTTP layer dispatches to. It depends only on
//! `talk2leader-types` -- never on `talk2leader-infra` or any IO crate.

pub mod biography;
pub mod chat;
pub mod history;
pub mod llm;
pub mod prompt;
