//! Statistics endpoint

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::StatsResponse;
use crate::routes::auth::AuthenticatedLearner;
use crate::AppState;

/// GET /api/stats
/// Word counts per level and per category; both groupings sum to the total
pub async fn stats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
) -> Result<Json<StatsResponse>> {
    let total = state.db.count_total(auth.learner_id).await?;
    let by_level = state.db.count_by_level(auth.learner_id).await?;
    let by_category = state.db.count_by_category(auth.learner_id).await?;

    Ok(Json(StatsResponse {
        total,
        by_level,
        by_category,
    }))
}
