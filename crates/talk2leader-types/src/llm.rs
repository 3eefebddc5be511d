//! Generative model request/response types for Talk2Leader.
//!
//! A request is a single content payload made of ordered text parts
//! (the persona instruction first, the user message second). The
//! response carries the generated text verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to a generative-text provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    /// Ordered text parts of one user content.
    pub parts: Vec<String>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            model: model.into(),
            parts,
        }
    }
}

/// Response from a generative-text provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    #[serde(default)]
    pub usage: Usage,
}

/// Reason why the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other(String),
}

impl FinishReason {
    /// Map a provider-specific finish reason string (e.g. `"STOP"`).
    pub fn from_provider(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::MaxTokens,
            "SAFETY" => FinishReason::Safety,
            _ => FinishReason::Other(s.to_string()),
        }
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::MaxTokens => write!(f, "max_tokens"),
            FinishReason::Safety => write!(f, "safety"),
            FinishReason::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Token usage reported by the provider, when available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from generative provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("response contained no text")]
    EmptyResponse,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reason_from_provider() {
        assert_eq!(FinishReason::from_provider("STOP"), FinishReason::Stop);
        assert_eq!(FinishReason::from_provider("max_tokens"), FinishReason::MaxTokens);
        assert_eq!(FinishReason::from_provider("SAFETY"), FinishReason::Safety);
        assert_eq!(
            FinishReason::from_provider("RECITATION"),
            FinishReason::Other("RECITATION".to_string())
        );
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 503: unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 503: unavailable");
        assert_eq!(LlmError::Blocked("SAFETY".into()).to_string(), "prompt blocked: SAFETY");
    }

    #[test]
    fn test_generate_request_preserves_part_order() {
        let req = GenerateRequest::new("m", vec!["first".into(), "second".into()]);
        assert_eq!(req.parts, vec!["first", "second"]);
    }
}
