//! Cryptographic helpers: session id signing and secret generation.

pub mod session_token;
