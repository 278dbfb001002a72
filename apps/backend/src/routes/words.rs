//! Word management endpoints: list, add, remove

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedLearner;
use crate::AppState;

/// GET /api/words
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
) -> Result<Json<WordListResponse>> {
    let words = state.db.list_all_words(auth.learner_id).await?;
    Ok(Json(WordListResponse { words }))
}

/// POST /api/words
/// Add a custom word, defaulting to the learner's active level/category
pub async fn add(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
    Json(payload): Json<AddWordRequest>,
) -> Result<Json<DbLearnerWord>> {
    let source_text = payload.source_text.trim().to_lowercase();
    let translation = payload.translation.trim().to_lowercase();
    if source_text.is_empty() || translation.is_empty() {
        return Err(ApiError::BadRequest(
            "Word and translation must not be empty".to_string(),
        ));
    }

    let learner = state
        .db
        .get_learner(auth.learner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Learner not found".to_string()))?;

    let level = payload
        .level
        .or(learner.level)
        .ok_or_else(|| ApiError::BadRequest("No level given and none selected".to_string()))?;
    let category = payload
        .category
        .map(|c| c.trim().to_lowercase())
        .or(learner.category)
        .ok_or_else(|| ApiError::BadRequest("No category given and none selected".to_string()))?;

    let word = state
        .db
        .add_custom_word(auth.learner_id, &source_text, &translation, level, &category)
        .await?
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "Word '{source_text} -> {translation}' already exists"
            ))
        })?;

    tracing::info!(learner = %auth.learner_id, word_id = word.id, "custom word added");

    Ok(Json(word))
}

/// DELETE /api/words/:id
/// Removal is only permitted for the learner's own custom words
pub async fn remove(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
    Path(word_id): Path<i64>,
) -> Result<Json<RemoveWordResponse>> {
    let word = state
        .db
        .get_learner_word(auth.learner_id, word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    if !word.to_core().kind.is_removable() {
        return Err(ApiError::BadRequest(
            "Baseline words cannot be removed".to_string(),
        ));
    }

    let removed = state.db.remove_word(auth.learner_id, word_id).await?;

    Ok(Json(RemoveWordResponse { removed }))
}
