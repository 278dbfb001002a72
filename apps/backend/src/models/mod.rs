//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::types::{Card, LearnerWord, Outcome, WordId, WordKind};

// === Database Entity Types ===

/// Registered learner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Learner {
    pub id: Uuid,
    pub token: String,
    pub username: Option<String>,
    /// Active study level; None until the learner picks one.
    pub level: Option<i32>,
    /// Active study category; None until the learner picks one.
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Learner-owned word row (baseline copy or custom entry)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLearnerWord {
    pub id: i64,
    pub learner_id: Uuid,
    pub source_text: String,
    pub translation: String,
    pub category: String,
    pub level: i32,
    pub is_custom: bool,
    pub weight: i32,
}

impl DbLearnerWord {
    /// Convert to the engine's word type
    pub fn to_core(&self) -> LearnerWord {
        LearnerWord {
            id: self.id,
            text: self.source_text.clone(),
            translation: self.translation.clone(),
            level: self.level,
            category: self.category.clone(),
            kind: if self.is_custom {
                WordKind::Custom
            } else {
                WordKind::Baseline
            },
            weight: self.weight.max(1) as u32,
        }
    }
}

// === API Request/Response Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub learner_id: Uuid,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerStatusResponse {
    pub learner_id: Uuid,
    pub username: Option<String>,
    pub level: Option<i32>,
    pub category: Option<String>,
    pub last_seen_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRequest {
    pub level: i32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextResponse {
    pub level: i32,
    pub category: String,
    /// Number of words available in the selected context.
    pub word_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextCardResponse {
    pub word_id: WordId,
    pub prompt: String,
    pub options: Vec<String>,
    pub level: i32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub word_id: WordId,
    pub chosen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub outcome: Outcome,
    /// Error weight of the word after processing the answer.
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipRequest {
    pub word_id: WordId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipResponse {
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWordRequest {
    pub source_text: String,
    pub translation: String,
    /// Defaults to the learner's active level.
    pub level: Option<i32>,
    /// Defaults to the learner's active category.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveWordResponse {
    pub removed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<DbLearnerWord>,
}

/// One level with its categories, for the selection menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: i32,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub levels: Vec<LevelInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Baseline words newly copied into the learner's pool.
    pub added: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LevelCount {
    pub level: i32,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: i64,
    pub by_level: Vec<LevelCount>,
    pub by_category: Vec<CategoryCount>,
}
