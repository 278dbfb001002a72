//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test learners
//! - Authentication helpers
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use vocab_trainer_backend::db::Database;
use vocab_trainer_backend::models::Learner;
use vocab_trainer_backend::routes;
use vocab_trainer_backend::services::sessions::SessionMap;
use vocab_trainer_backend::AppState;

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            sessions: Arc::new(SessionMap::new()),
        };

        let app = build_test_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test learner and return its ID and token.
    ///
    /// Registration also copies the baseline catalog into the learner's pool.
    pub async fn create_test_learner(&self, username: Option<&str>) -> (Uuid, String) {
        let learner = self
            .db
            .create_learner(username)
            .await
            .expect("Failed to create test learner");
        (learner.id, learner.token)
    }

    /// Get learner by token.
    pub async fn get_learner_by_token(&self, token: &str) -> Option<Learner> {
        self.db.get_learner_by_token(token).await.ok().flatten()
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Clean up test data for a learner.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_learner(&self, learner_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query("DELETE FROM learner_words WHERE learner_id = $1")
            .bind(learner_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM learners WHERE id = $1")
            .bind(learner_id)
            .execute(self.db.pool())
            .await;
    }
}

/// Build the test router with all routes.
fn build_test_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/learner/status", get(routes::learner::status))
        .route("/api/study/context", put(routes::study::set_context))
        .route("/api/study/next-card", get(routes::study::next_card))
        .route("/api/study/answer", post(routes::study::answer))
        .route("/api/study/skip", post(routes::study::skip))
        .route("/api/words", get(routes::words::list))
        .route("/api/words", post(routes::words::add))
        .route("/api/words/:id", delete(routes::words::remove))
        .route("/api/catalog/levels", get(routes::catalog::levels))
        .route("/api/catalog/refresh", post(routes::catalog::refresh))
        .route("/api/stats", get(routes::stats::stats))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/learner/register", post(routes::learner::register))
        .merge(protected_routes)
        .with_state(state)
}
