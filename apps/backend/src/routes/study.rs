//! Study endpoints: context selection, next card, answer, skip

use axum::{extract::State, Extension, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedLearner;
use crate::AppState;

/// PUT /api/study/context
/// Select the active level/category; resets the recency window
pub async fn set_context(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
    Json(payload): Json<ContextRequest>,
) -> Result<Json<ContextResponse>> {
    let category = payload.category.trim().to_lowercase();
    if category.is_empty() {
        return Err(ApiError::BadRequest("Category must not be empty".to_string()));
    }

    state
        .db
        .set_context(auth.learner_id, payload.level, &category)
        .await?;

    let session = state
        .sessions
        .session(auth.learner_id, payload.level, &category);
    session.lock().await.switch_context(payload.level, &category);

    let word_count = state
        .db
        .count_in_context(auth.learner_id, payload.level, &category)
        .await?;

    tracing::debug!(
        learner = %auth.learner_id,
        level = payload.level,
        category = %category,
        word_count,
        "context switched"
    );

    Ok(Json(ContextResponse {
        level: payload.level,
        category,
        word_count,
    }))
}

/// GET /api/study/next-card
pub async fn next_card(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
) -> Result<Json<NextCardResponse>> {
    let (level, category) = active_context(&state, auth.learner_id).await?;

    let session = state.sessions.session(auth.learner_id, level, &category);
    let mut session = session.lock().await;
    session.switch_context(level, &category);

    let rows = state
        .db
        .list_active_pool(auth.learner_id, level, &category)
        .await?;
    let pool: Vec<LearnerWord> = rows.iter().map(DbLearnerWord::to_core).collect();

    // Distractors may come from the whole word list, not just the
    // active slice, so small categories still fill their cards.
    let catalog_rows = state.db.list_all_words(auth.learner_id).await?;
    let catalog: Vec<LearnerWord> = catalog_rows.iter().map(DbLearnerWord::to_core).collect();

    let mut rng = StdRng::from_entropy();
    let card = vocab_core::next_card(&pool, &catalog, &mut session, &mut rng)?;

    Ok(Json(NextCardResponse {
        word_id: card.word_id,
        prompt: card.prompt,
        options: card.options,
        level,
        category,
    }))
}

/// POST /api/study/answer
pub async fn answer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let (level, category) = active_context(&state, auth.learner_id).await?;

    let session = state.sessions.session(auth.learner_id, level, &category);
    let mut session = session.lock().await;
    session.switch_context(level, &category);

    let rows = state
        .db
        .list_active_pool(auth.learner_id, level, &category)
        .await?;
    let mut pool: Vec<LearnerWord> = rows.iter().map(DbLearnerWord::to_core).collect();

    let outcome = vocab_core::answer(&mut pool, &mut session, payload.word_id, &payload.chosen)?;
    if outcome == Outcome::Incorrect {
        state
            .db
            .increment_weight(auth.learner_id, payload.word_id)
            .await?;
    }

    let weight = pool
        .iter()
        .find(|w| w.id == payload.word_id)
        .map(|w| w.weight)
        .unwrap_or(vocab_core::BASELINE_WEIGHT);

    Ok(Json(AnswerResponse { outcome, weight }))
}

/// POST /api/study/skip
/// Rotates the card away without touching the error weight
pub async fn skip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
    Json(payload): Json<SkipRequest>,
) -> Result<Json<SkipResponse>> {
    let (level, category) = active_context(&state, auth.learner_id).await?;

    let session = state.sessions.session(auth.learner_id, level, &category);
    let mut session = session.lock().await;
    session.switch_context(level, &category);

    let rows = state
        .db
        .list_active_pool(auth.learner_id, level, &category)
        .await?;
    let pool: Vec<LearnerWord> = rows.iter().map(DbLearnerWord::to_core).collect();

    let outcome = vocab_core::skip(&pool, &mut session, payload.word_id)?;

    Ok(Json(SkipResponse { outcome }))
}

/// The learner's stored level/category, or a 400 prompting selection
async fn active_context(state: &AppState, learner_id: Uuid) -> Result<(i32, String)> {
    let learner = state
        .db
        .get_learner(learner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Learner not found".to_string()))?;

    match (learner.level, learner.category) {
        (Some(level), Some(category)) => Ok((level, category)),
        _ => Err(ApiError::BadRequest(
            "Select a level and category first".to_string(),
        )),
    }
}
