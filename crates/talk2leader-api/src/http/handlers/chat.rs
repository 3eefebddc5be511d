//! Chat API handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use talk2leader_types::chat::{ChatRequest, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat - one stateless exchange with a persona.
///
/// The message is answered in isolation; stored history is never sent
/// to the provider.
pub async fn process_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = body?;

    if request.leader_name.trim().is_empty() {
        return Err(AppError::Validation("leader_name is required".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let response = state
        .responder
        .respond(&request.leader_name, &request.message)
        .await?;
    Ok(Json(response))
}
