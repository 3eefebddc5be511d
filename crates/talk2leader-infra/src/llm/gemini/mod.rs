//! Google Gemini provider (`models/{model}:generateContent`).

pub mod client;
pub mod types;

pub use client::GeminiProvider;
