//! Bearer-token authentication for the protected API surface.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::AppState;

/// Identity attached to a request once its token checks out.
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatedLearner {
    pub learner_id: Uuid,
}

/// Token value of an `Authorization: Bearer <token>` header, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the bearer token to a learner and records the contact as
/// their last-seen time, in a single round trip. Registration and the
/// health probe pass through unauthenticated.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    if matches!(request.uri().path(), "/api/learner/register" | "/health") {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("Bearer token required".to_string()))?
        .to_string();

    let learner = state
        .db
        .touch_learner(&token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Unknown token".to_string()))?;

    request
        .extensions_mut()
        .insert(AuthenticatedLearner { learner_id: learner.id });

    Ok(next.run(request).await)
}
