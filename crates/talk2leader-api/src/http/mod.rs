//! HTTP layer for Talk2Leader.
//!
//! Axum router serving two HTML pages and a small JSON API. Every page
//! and API route runs behind the session middleware, which binds the
//! request to a signed, cookie-carried session id.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod session;
