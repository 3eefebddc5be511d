//! Axum router configuration for Talk2Leader.

use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::session::session_layer;
use crate::state::AppState;

/// Build the application router.
///
/// Pages and API routes sit behind the session middleware. `/health`
/// and static assets do not touch the session.
pub fn build_router(state: AppState) -> Router {
    let app_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/chat/{leader_name}", get(handlers::pages::chat_page))
        .route("/api/chat", post(handlers::chat::process_chat))
        .route(
            "/api/chat_history/{leader_name}",
            get(handlers::history::get_history)
                .post(handlers::history::update_history)
                .delete(handlers::history::clear_history),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), session_layer));

    let mut router = Router::new()
        .merge(app_routes)
        .route("/health", get(health));

    if let Some(dir) = state.config.static_dir.as_ref().filter(|dir| dir.is_dir()) {
        tracing::debug!(dir = %dir.display(), "Serving static assets");
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
