//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Learner Repository ===

    /// Register a learner and copy the baseline catalog into their pool
    pub async fn create_learner(&self, username: Option<&str>) -> Result<Learner> {
        let token = Uuid::new_v4().to_string();
        let learner = sqlx::query_as::<_, Learner>(
            r#"
            INSERT INTO learners (token, username)
            VALUES ($1, $2)
            RETURNING id, token, username, level, category, created_at, last_seen_at
            "#,
        )
        .bind(&token)
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        self.copy_baseline(learner.id).await?;

        Ok(learner)
    }

    /// Get learner by token
    pub async fn get_learner_by_token(&self, token: &str) -> Result<Option<Learner>> {
        let learner = sqlx::query_as::<_, Learner>(
            r#"
            SELECT id, token, username, level, category, created_at, last_seen_at
            FROM learners
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(learner)
    }

    /// Get learner by id
    pub async fn get_learner(&self, learner_id: Uuid) -> Result<Option<Learner>> {
        let learner = sqlx::query_as::<_, Learner>(
            r#"
            SELECT id, token, username, level, category, created_at, last_seen_at
            FROM learners
            WHERE id = $1
            "#,
        )
        .bind(learner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(learner)
    }

    /// Authenticate by token, bumping last_seen_at in the same statement.
    /// Returns None for an unknown token.
    pub async fn touch_learner(&self, token: &str) -> Result<Option<Learner>> {
        let learner = sqlx::query_as::<_, Learner>(
            r#"
            UPDATE learners
            SET last_seen_at = NOW()
            WHERE token = $1
            RETURNING id, token, username, level, category, created_at, last_seen_at
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(learner)
    }

    /// Set the learner's active level and category
    pub async fn set_context(&self, learner_id: Uuid, level: i32, category: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE learners
            SET level = $2, category = $3
            WHERE id = $1
            "#,
        )
        .bind(learner_id)
        .bind(level)
        .bind(category)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Learner Word Repository ===

    /// Copy baseline catalog words the learner does not have yet.
    /// Custom words and existing copies (with their weights) are untouched.
    pub async fn copy_baseline(&self, learner_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO learner_words (learner_id, source_text, translation, category, level, is_custom, weight)
            SELECT $1, source_text, translation, category, level, FALSE, 1
            FROM words
            ON CONFLICT (learner_id, source_text, translation, category, level) DO NOTHING
            "#,
        )
        .bind(learner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Words available for study in the given level and category
    pub async fn list_active_pool(
        &self,
        learner_id: Uuid,
        level: i32,
        category: &str,
    ) -> Result<Vec<DbLearnerWord>> {
        let words = sqlx::query_as::<_, DbLearnerWord>(
            r#"
            SELECT id, learner_id, source_text, translation, category, level, is_custom, weight
            FROM learner_words
            WHERE learner_id = $1 AND level = $2 AND category = $3
            ORDER BY id
            "#,
        )
        .bind(learner_id)
        .bind(level)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// All of a learner's words, for listing
    pub async fn list_all_words(&self, learner_id: Uuid) -> Result<Vec<DbLearnerWord>> {
        let words = sqlx::query_as::<_, DbLearnerWord>(
            r#"
            SELECT id, learner_id, source_text, translation, category, level, is_custom, weight
            FROM learner_words
            WHERE learner_id = $1
            ORDER BY level, category, id
            "#,
        )
        .bind(learner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Get a single learner word
    pub async fn get_learner_word(
        &self,
        learner_id: Uuid,
        word_id: i64,
    ) -> Result<Option<DbLearnerWord>> {
        let word = sqlx::query_as::<_, DbLearnerWord>(
            r#"
            SELECT id, learner_id, source_text, translation, category, level, is_custom, weight
            FROM learner_words
            WHERE learner_id = $1 AND id = $2
            "#,
        )
        .bind(learner_id)
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Current error weight of a learner's word
    pub async fn get_weight(&self, learner_id: Uuid, word_id: i64) -> Result<Option<i32>> {
        let weight: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT weight
            FROM learner_words
            WHERE learner_id = $1 AND id = $2
            "#,
        )
        .bind(learner_id)
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(weight)
    }

    /// Increment the error weight of a learner's word
    pub async fn increment_weight(&self, learner_id: Uuid, word_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE learner_words
            SET weight = weight + 1
            WHERE learner_id = $1 AND id = $2
            "#,
        )
        .bind(learner_id)
        .bind(word_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Add a custom word. Returns None when the learner already has an
    /// identical entry in that level and category.
    pub async fn add_custom_word(
        &self,
        learner_id: Uuid,
        source_text: &str,
        translation: &str,
        level: i32,
        category: &str,
    ) -> Result<Option<DbLearnerWord>> {
        let word = sqlx::query_as::<_, DbLearnerWord>(
            r#"
            INSERT INTO learner_words (learner_id, source_text, translation, category, level, is_custom, weight)
            VALUES ($1, $2, $3, $4, $5, TRUE, 1)
            ON CONFLICT (learner_id, source_text, translation, category, level) DO NOTHING
            RETURNING id, learner_id, source_text, translation, category, level, is_custom, weight
            "#,
        )
        .bind(learner_id)
        .bind(source_text)
        .bind(translation)
        .bind(category)
        .bind(level)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Delete a learner's word
    pub async fn remove_word(&self, learner_id: Uuid, word_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM learner_words
            WHERE learner_id = $1 AND id = $2
            "#,
        )
        .bind(learner_id)
        .bind(word_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // === Catalog / Statistics ===

    /// Word count in one level/category context
    pub async fn count_in_context(
        &self,
        learner_id: Uuid,
        level: i32,
        category: &str,
    ) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM learner_words
            WHERE learner_id = $1 AND level = $2 AND category = $3
            "#,
        )
        .bind(learner_id)
        .bind(level)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Total active word count for a learner
    pub async fn count_total(&self, learner_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM learner_words
            WHERE learner_id = $1
            "#,
        )
        .bind(learner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Word counts grouped by level
    pub async fn count_by_level(&self, learner_id: Uuid) -> Result<Vec<LevelCount>> {
        let counts = sqlx::query_as::<_, LevelCount>(
            r#"
            SELECT level, COUNT(*) AS count
            FROM learner_words
            WHERE learner_id = $1
            GROUP BY level
            ORDER BY level
            "#,
        )
        .bind(learner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    /// Word counts grouped by category
    pub async fn count_by_category(&self, learner_id: Uuid) -> Result<Vec<CategoryCount>> {
        let counts = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM learner_words
            WHERE learner_id = $1
            GROUP BY category
            ORDER BY category
            "#,
        )
        .bind(learner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    /// Distinct levels and categories across the baseline catalog and the
    /// learner's own words, for the selection menu
    pub async fn list_levels_and_categories(&self, learner_id: Uuid) -> Result<Vec<LevelInfo>> {
        let rows: Vec<(i32, String)> = sqlx::query_as(
            r#"
            SELECT level, category FROM (
                SELECT DISTINCT level, category FROM words
                UNION
                SELECT DISTINCT level, category FROM learner_words WHERE learner_id = $1
            ) AS merged
            ORDER BY level, category
            "#,
        )
        .bind(learner_id)
        .fetch_all(&self.pool)
        .await?;

        let mut levels: Vec<LevelInfo> = Vec::new();
        for (level, category) in rows {
            match levels.last_mut() {
                Some(info) if info.level == level => info.categories.push(category),
                _ => levels.push(LevelInfo {
                    level,
                    categories: vec![category],
                }),
            }
        }

        Ok(levels)
    }
}
