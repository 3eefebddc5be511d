//! LlmProvider trait definition.
//!
//! This is the core abstraction that every generative-text backend
//! implements. Uses RPITIT for `generate`.

use talk2leader_types::llm::{GenerateRequest, GenerateResponse, LlmError};

/// Trait for generative-text provider backends (Gemini, test doubles).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in talk2leader-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the full response.
    ///
    /// A single call; implementations must not retry.
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl std::future::Future<Output = Result<GenerateResponse, LlmError>> + Send;
}
