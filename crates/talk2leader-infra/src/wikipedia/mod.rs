//! Wikipedia biography source (MediaWiki action API).

pub mod client;
pub mod types;

pub use client::WikipediaClient;
