use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Identity of the caller, attached to request extensions once the bearer
/// token checks out.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub subject: String,
}

#[derive(Serialize)]
struct ErrorBody { error: String, code: &'static str }

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_header = match req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok()) {
        Some(h) => h,
        None => return unauthorized("Missing Authorization header"),
    };

    // Expect "Bearer <token>"
    let token = match auth_header.strip_prefix("Bearer ") {
        Some(t) if !t.trim().is_empty() => t.trim(),
        _ => return unauthorized("Invalid Authorization format"),
    };

    let claims = match state.jwt.verify(token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = ?e, "Rejected bearer token");
            return unauthorized("Invalid or expired token");
        }
    };

    req.extensions_mut().insert(AuthContext { subject: claims.sub });

    next.run(req).await
}

fn unauthorized(msg: &str) -> Response {
    tracing::info!(reason = msg, "Unauthorized request");
    let body = axum::Json(ErrorBody { error: msg.to_string(), code: "unauthorized" });
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        body,
    )
        .into_response()
}
