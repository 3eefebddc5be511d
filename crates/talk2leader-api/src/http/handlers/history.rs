//! Per-session chat history handlers.
//!
//! All three operate on the entry keyed by the caller's session and the
//! leader name taken from the path.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use talk2leader_types::chat::{ChatHistory, HistoryUpdate, StatusBody};

use crate::http::error::AppError;
use crate::http::session::Session;
use crate::state::AppState;

/// GET /api/chat_history/{leader_name}
pub async fn get_history(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(leader_name): Path<String>,
) -> Result<Json<ChatHistory>, AppError> {
    let history = state.history.read(&session_id, &leader_name).await?;
    Ok(Json(history))
}

/// POST /api/chat_history/{leader_name} - replace the stored turns.
pub async fn update_history(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(leader_name): Path<String>,
    body: Result<Json<HistoryUpdate>, JsonRejection>,
) -> Result<Json<StatusBody>, AppError> {
    let Json(update) = body?;
    state.history.write(&session_id, &leader_name, &update.history).await?;
    Ok(Json(StatusBody::success()))
}

/// DELETE /api/chat_history/{leader_name}
pub async fn clear_history(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(leader_name): Path<String>,
) -> Result<Json<StatusBody>, AppError> {
    state.history.delete(&session_id, &leader_name).await?;
    Ok(Json(StatusBody::success()))
}
