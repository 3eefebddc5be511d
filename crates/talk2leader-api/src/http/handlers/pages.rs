//! HTML page handlers.

use axum::extract::{Path, State};
use axum::response::Html;

use crate::http::pages::{render_chat, render_home};
use crate::state::AppState;

/// GET / - landing page.
pub async fn home() -> Html<String> {
    Html(render_home())
}

/// GET /chat/{leader_name} - chat page with the leader's biography.
///
/// A failed or empty biography lookup still renders the page.
pub async fn chat_page(State(state): State<AppState>, Path(leader_name): Path<String>) -> Html<String> {
    let info = state.biography.lookup(&leader_name).await;
    Html(render_chat(&leader_name, info.as_ref()))
}
