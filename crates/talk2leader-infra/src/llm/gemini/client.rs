//! GeminiProvider -- concrete [`LlmProvider`] for the Gemini API.
//!
//! Sends one `generateContent` request per call. The API key is wrapped in
//! [`SecretString`] and only exposed when building the request header.

use secrecy::{ExposeSecret, SecretString};

use talk2leader_core::llm::provider::LlmProvider;
use talk2leader_types::llm::{FinishReason, GenerateRequest, GenerateResponse, LlmError, Usage};

use super::types::{GeminiContent, GeminiErrorEnvelope, GeminiPart, GeminiRequest, GeminiResponse};

/// Gemini generative-text provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    /// Convert a [`GenerateRequest`] into one user content with ordered text parts.
    fn to_gemini_request(request: &GenerateRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: request
                    .parts
                    .iter()
                    .map(|p| GeminiPart {
                        text: Some(p.clone()),
                    })
                    .collect(),
            }],
        }
    }

    /// Map a non-success status and body to an [`LlmError`].
    fn map_error(status: reqwest::StatusCode, body: &str) -> LlmError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|env| format!("{} ({})", env.error.message, env.error.status))
            .unwrap_or_else(|_| body.to_string());

        match status.as_u16() {
            401 | 403 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited,
            400 => LlmError::InvalidRequest(message),
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {message}"),
            },
        }
    }

    /// Extract the reply from a decoded response.
    ///
    /// The text is the concatenation of the first candidate's text parts.
    /// A blocked prompt or a candidate without text is an error.
    fn into_generate_response(response: GeminiResponse, model: &str) -> Result<GenerateResponse, LlmError> {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(LlmError::Blocked(reason));
        }

        let candidate = response.candidates.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        let finish_reason = candidate.finish_reason.as_deref().map(FinishReason::from_provider);

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if texts.is_empty() {
            return Err(match finish_reason {
                Some(FinishReason::Safety) => LlmError::Blocked("SAFETY".to_string()),
                _ => LlmError::EmptyResponse,
            });
        }

        let usage = response.usage_metadata.unwrap_or_default();

        Ok(GenerateResponse {
            text: texts.concat(),
            model: response.model_version.unwrap_or_else(|| model.to_string()),
            finish_reason,
            usage: Usage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            },
        })
    }
}

// No Debug derive: keeps the client and key out of accidental log output.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let body = Self::to_gemini_request(request);

        let response = self
            .client
            .post(self.url(&request.model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status, &error_body));
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        Self::into_generate_response(gemini_resp, &request.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GeminiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_provider_name() {
        let provider = GeminiProvider::new(SecretString::from("test-key-not-real"));
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_url_with_base_override() {
        let provider = GeminiProvider::new(SecretString::from("k"))
            .with_base_url("http://localhost:8080/".to_string());
        assert_eq!(
            provider.url("gemini-2.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_is_one_user_content_with_ordered_parts() {
        let request = GenerateRequest::new("gemini-2.5-flash", vec!["instruction".into(), "message".into()]);
        let json = serde_json::to_value(GeminiProvider::to_gemini_request(&request)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "instruction"}, {"text": "message"}]
                }]
            })
        );
    }

    #[test]
    fn test_response_concatenates_first_candidate_parts() {
        let resp = parse(
            r#"{
                "candidates": [
                    {"content": {"role": "model", "parts": [{"text": "Vive "}, {"text": "la France!"}]}, "finishReason": "STOP"},
                    {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
                ],
                "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 8, "totalTokenCount": 128},
                "modelVersion": "gemini-2.5-flash"
            }"#,
        );
        let out = GeminiProvider::into_generate_response(resp, "gemini-2.5-flash").unwrap();
        assert_eq!(out.text, "Vive la France!");
        assert_eq!(out.finish_reason, Some(FinishReason::Stop));
        assert_eq!(out.usage.input_tokens, 120);
        assert_eq!(out.usage.output_tokens, 8);
    }

    #[test]
    fn test_blocked_prompt_is_error() {
        let resp = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        let err = GeminiProvider::into_generate_response(resp, "m").unwrap_err();
        assert!(matches!(err, LlmError::Blocked(ref r) if r == "SAFETY"));
    }

    #[test]
    fn test_no_candidates_is_error() {
        let resp = parse(r#"{"candidates": []}"#);
        let err = GeminiProvider::into_generate_response(resp, "m").unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[test]
    fn test_safety_stop_without_text_is_blocked() {
        let resp = parse(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
        let err = GeminiProvider::into_generate_response(resp, "m").unwrap_err();
        assert!(matches!(err, LlmError::Blocked(_)));
    }

    #[test]
    fn test_map_error_statuses() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let err = GeminiProvider::map_error(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "invalid request: API key not valid. (INVALID_ARGUMENT)");

        assert!(matches!(
            GeminiProvider::map_error(reqwest::StatusCode::FORBIDDEN, ""),
            LlmError::AuthenticationFailed
        ));
        assert!(matches!(
            GeminiProvider::map_error(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            LlmError::RateLimited
        ));

        let err = GeminiProvider::map_error(reqwest::StatusCode::SERVICE_UNAVAILABLE, "overloaded");
        assert_eq!(err.to_string(), "provider error: HTTP 503 Service Unavailable: overloaded");
    }
}
