//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// Identifier of a learner's word record.
pub type WordId = i64;

/// Number of answer options on every card.
pub const OPTIONS_PER_CARD: usize = 4;

/// Error weight of a word that has never been answered incorrectly.
pub const BASELINE_WEIGHT: u32 = 1;

/// Origin of a learner's word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    /// Copied from the shared baseline catalog on account bootstrap.
    Baseline,
    /// Added by the learner.
    Custom,
}

impl WordKind {
    /// Only words the learner added themselves may be removed.
    pub fn is_removable(self) -> bool {
        matches!(self, Self::Custom)
    }
}

/// A learner-owned word record.
///
/// Carries its own source and translation text, so baseline copies and
/// fully custom entries are represented uniformly; `kind` only affects
/// removal permission, never selection weighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerWord {
    pub id: WordId,
    /// Source-language text shown as the card prompt.
    pub text: String,
    /// Target-language text the learner must pick among the options.
    pub translation: String,
    pub level: i32,
    pub category: String,
    pub kind: WordKind,
    /// Error weight, incremented on each incorrect answer. Never below 1.
    pub weight: u32,
}

/// Answer outcome for a submitted card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
}

/// One quiz presentation: a prompt plus four answer options.
///
/// Exactly one option equals the target word's translation; its slot is
/// randomized per presentation. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub word_id: WordId,
    pub prompt: String,
    pub options: Vec<String>,
}
