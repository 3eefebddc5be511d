//! Generative provider implementations.

pub mod gemini;
