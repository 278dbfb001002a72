//! Learner registration and status endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{LearnerStatusResponse, RegisterRequest, RegisterResponse};
use crate::routes::auth::AuthenticatedLearner;
use crate::AppState;

/// POST /api/learner/register
/// Creates a learner, copies the baseline catalog, returns the token.
/// The body is optional; an empty POST registers an anonymous learner.
pub async fn register(
    State(state): State<AppState>,
    payload: Option<Json<RegisterRequest>>,
) -> Result<Json<RegisterResponse>> {
    let username = payload.and_then(|Json(p)| p.username);
    let learner = state.db.create_learner(username.as_deref()).await?;

    tracing::info!("Registered new learner: {}", learner.id);

    Ok(Json(RegisterResponse {
        learner_id: learner.id,
        token: learner.token,
    }))
}

/// GET /api/learner/status
/// Returns the learner's active context
pub async fn status(
    Extension(auth): Extension<AuthenticatedLearner>,
    State(state): State<AppState>,
) -> Result<Json<LearnerStatusResponse>> {
    let learner = state
        .db
        .get_learner(auth.learner_id)
        .await?
        .ok_or_else(|| crate::error::ApiError::NotFound("Learner not found".to_string()))?;

    Ok(Json(LearnerStatusResponse {
        learner_id: learner.id,
        username: learner.username,
        level: learner.level,
        category: learner.category,
        last_seen_at: learner.last_seen_at,
    }))
}
