//! Cookie-backed session binding.
//!
//! `session_layer` reads the signed session cookie, minting a fresh
//! session id (and a `Set-Cookie`) when it is missing, malformed, or
//! forged. Handlers receive the id through the [`Session`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::http::error::AppError;
use crate::state::AppState;

/// Session id resolved for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session(pub Uuid);

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .copied()
            .ok_or_else(|| AppError::Internal("session middleware not installed".to_string()))
    }
}

/// Find the value of cookie `name` across all `Cookie` headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// Middleware binding each request to a session.
pub async fn session_layer(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let settings = &state.sessions;

    let existing = read_cookie(request.headers(), &settings.cookie_name)
        .and_then(|token| settings.signer.verify(&token));

    let (session_id, is_new) = match existing {
        Some(id) => (id, false),
        None => (Uuid::now_v7(), true),
    };

    request.extensions_mut().insert(Session(session_id));
    let mut response = next.run(request).await;

    if is_new {
        tracing::debug!(session_id = %session_id, "Started new session");
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            settings.cookie_name,
            settings.signer.sign(&session_id)
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "Session cookie is not a valid header value"),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; talk2leader_session=abc.def; x=1"));
        assert_eq!(read_cookie(&headers, "talk2leader_session").as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_read_cookie_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("sid=xyz"));
        assert_eq!(read_cookie(&headers, "sid").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_read_cookie_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("sid_other=1"));
        assert_eq!(read_cookie(&headers, "sid"), None);
        assert_eq!(read_cookie(&HeaderMap::new(), "sid"), None);
    }
}
