use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::debug;

use crate::services::auth_service::ActiveSession;
use crate::AppState;

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Session behind the request's bearer token, if any.
pub fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<ActiveSession> {
    let Some(token) = bearer_token(headers) else {
        debug!("request without a bearer token");
        return None;
    };
    state.auth_service.restore(token)
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error":"unauthenticated"})),
    )
        .into_response()
}

/// Rejects requests without a live session and hands the session to the
/// handler as an extension.
pub async fn require_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match resolve_session(&state, req.headers()) {
        Some(active) => {
            req.extensions_mut().insert(active);
            next.run(req).await
        }
        None => unauthenticated(),
    }
}
