//! Core word-selection library for the vocabulary trainer.
//!
//! Provides:
//! - Recency window excluding recently passed words from re-selection
//! - Error-weight-proportional word selection
//! - Distractor generation for four-option answer cards
//! - Answer processing (correct / incorrect / skipped)
//! - Shared types (LearnerWord, Card, Outcome, etc.)

pub mod distractor;
pub mod engine;
pub mod error;
pub mod recency;
pub mod selector;
pub mod session;
pub mod types;

pub use engine::{answer, next_card, skip};
pub use error::{EngineError, Result};
pub use recency::{admit, RecencyWindow, RECENCY_CAPACITY};
pub use session::StudySession;
pub use types::{Card, LearnerWord, Outcome, WordId, WordKind, BASELINE_WEIGHT, OPTIONS_PER_CARD};
