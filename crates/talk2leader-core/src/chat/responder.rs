//! Chat responder: persona instruction + user message -> generated reply.

use chrono::Local;
use tracing::{debug, error};

use talk2leader_types::chat::ChatResponse;
use talk2leader_types::llm::{GenerateRequest, LlmError};

use crate::llm::box_provider::BoxLlmProvider;
use crate::prompt::PersonaPromptBuilder;

/// Timestamp layout attached to every reply (server-local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sends one persona-framed message to the provider per call.
///
/// There is no retry: a failed provider call surfaces immediately.
pub struct ChatResponder {
    provider: BoxLlmProvider,
    model: String,
}

impl ChatResponder {
    /// Create a responder bound to a provider and a fixed model identifier.
    pub fn new(provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// The model identifier every request is sent with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the two-part payload for `persona` and `message`.
    pub fn build_request(&self, persona: &str, message: &str) -> GenerateRequest {
        GenerateRequest::new(
            self.model.clone(),
            vec![PersonaPromptBuilder::build(persona), message.to_string()],
        )
    }

    /// Generate `persona`'s reply to `message`.
    ///
    /// Returns the generated text verbatim with a local timestamp.
    pub async fn respond(&self, persona: &str, message: &str) -> Result<ChatResponse, LlmError> {
        let request = self.build_request(persona, message);

        let response = self.provider.generate(&request).await.map_err(|e| {
            error!(
                leader = %persona,
                provider = self.provider.name(),
                error = %e,
                "Generative call failed"
            );
            e
        })?;

        debug!(
            leader = %persona,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Generated reply"
        );

        Ok(ChatResponse {
            response: response.text,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use talk2leader_types::llm::{GenerateResponse, Usage};

    use crate::llm::provider::LlmProvider;

    // --- Mock provider ---

    struct MockProvider {
        result: Result<String, String>,
        seen: Arc<Mutex<Vec<GenerateRequest>>>,
    }

    impl MockProvider {
        fn ok(text: &str) -> (Self, Arc<Mutex<Vec<GenerateRequest>>>) {
            let seen = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    result: Ok(text.to_string()),
                    seen: seen.clone(),
                },
                seen,
            )
        }

        fn failing(message: &str) -> (Self, Arc<Mutex<Vec<GenerateRequest>>>) {
            let seen = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    result: Err(message.to_string()),
                    seen: seen.clone(),
                },
                seen,
            )
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.result {
                Ok(text) => Ok(GenerateResponse {
                    text: text.clone(),
                    model: request.model.clone(),
                    finish_reason: None,
                    usage: Usage::default(),
                }),
                Err(message) => Err(LlmError::Provider {
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_respond_returns_text_verbatim() {
        let (provider, _) = MockProvider::ok("  Je suis l'Empereur.\n");
        let responder = ChatResponder::new(BoxLlmProvider::new(provider), "gemini-2.5-flash");

        let reply = responder.respond("Napoleon", "Who are you?").await.unwrap();
        assert_eq!(reply.response, "  Je suis l'Empereur.\n");
    }

    #[tokio::test]
    async fn test_timestamp_format() {
        let (provider, _) = MockProvider::ok("ok");
        let responder = ChatResponder::new(BoxLlmProvider::new(provider), "m");

        let reply = responder.respond("Napoleon", "Hi").await.unwrap();
        assert_eq!(reply.timestamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&reply.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn test_sends_instruction_then_message_with_fixed_model() {
        let (provider, seen) = MockProvider::ok("ok");
        let responder = ChatResponder::new(BoxLlmProvider::new(provider), "gemini-2.5-flash");

        responder.respond("Cleopatra", "Tell me about Rome").await.unwrap();

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gemini-2.5-flash");
        assert_eq!(requests[0].parts.len(), 2);
        assert_eq!(requests[0].parts[0], PersonaPromptBuilder::build("Cleopatra"));
        assert_eq!(requests[0].parts[1], "Tell me about Rome");
    }

    #[tokio::test]
    async fn test_failure_surfaces_without_retry() {
        let (provider, seen) = MockProvider::failing("HTTP 503: overloaded");
        let responder = ChatResponder::new(BoxLlmProvider::new(provider), "m");

        let err = responder.respond("Napoleon", "Hi").await.unwrap_err();
        assert!(err.to_string().contains("overloaded"));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
