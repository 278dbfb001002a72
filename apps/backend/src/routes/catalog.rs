//! Catalog endpoints: level/category menu and baseline refresh

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{CatalogResponse, RefreshResponse};
use crate::routes::auth::AuthenticatedLearner;
use crate::AppState;

/// GET /api/catalog/levels
pub async fn levels(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
) -> Result<Json<CatalogResponse>> {
    let levels = state
        .db
        .list_levels_and_categories(auth.learner_id)
        .await?;
    Ok(Json(CatalogResponse { levels }))
}

/// POST /api/catalog/refresh
/// Re-copies baseline words the learner is missing; custom words and
/// accumulated weights are preserved
pub async fn refresh(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedLearner>,
) -> Result<Json<RefreshResponse>> {
    let added = state.db.copy_baseline(auth.learner_id).await?;

    tracing::info!(learner = %auth.learner_id, added, "baseline refreshed");

    Ok(Json(RefreshResponse { added }))
}
