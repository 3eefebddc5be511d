//! Chat domain types: turns, histories, and chat endpoint payloads.

use serde::{Deserialize, Serialize};

/// One message unit within a persona's chat history.
///
/// The shape is owned by the browser client (typically `{"role", "text"}`)
/// and is stored and returned verbatim, so it wraps an arbitrary JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatTurn(pub serde_json::Value);

impl ChatTurn {
    /// Convenience constructor for the conventional `{role, text}` shape.
    pub fn new(role: &str, text: &str) -> Self {
        Self(serde_json::json!({ "role": role, "text": text }))
    }
}

/// Ordered sequence of turns for one persona.
pub type ChatHistory = Vec<ChatTurn>;

/// Request body for `POST /api/chat`.
///
/// Both fields default to empty so that missing fields surface as a
/// validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub leader_name: String,
}

/// Successful reply from the chat responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text, verbatim.
    pub response: String,
    /// Server-local time formatted as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

/// Request body for `POST /api/chat_history/{leader}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryUpdate {
    #[serde(default)]
    pub history: ChatHistory,
}

/// Error body shared by every JSON endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Acknowledgement body for history mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_turn_is_transparent() {
        let turn = ChatTurn::new("user", "Hi");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"Hi"}"#);
    }

    #[test]
    fn test_chat_turn_accepts_arbitrary_shape() {
        let turn: ChatTurn = serde_json::from_str(r#"{"author":"bot","body":[1,2]}"#).unwrap();
        assert_eq!(turn.0["author"], "bot");
    }

    #[test]
    fn test_history_update_missing_field_defaults_to_empty() {
        let update: HistoryUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.history.is_empty());
    }

    #[test]
    fn test_history_update_rejects_non_array() {
        let result = serde_json::from_str::<HistoryUpdate>(r#"{"history":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_missing_fields_default() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"Hello"}"#).unwrap();
        assert_eq!(req.message, "Hello");
        assert!(req.leader_name.is_empty());
    }

    #[test]
    fn test_status_body_success() {
        let json = serde_json::to_string(&StatusBody::success()).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }
}
