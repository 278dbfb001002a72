//! Error types for vocab-core.

use thiserror::Error;

use crate::types::WordId;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors produced by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The active level/category has no words. Recoverable: the caller
    /// should prompt for another category or for adding words.
    #[error("no words available in the active level and category")]
    EmptyPool,

    /// A submitted or removed word is not in the learner's pool.
    #[error("word {word_id} not found in the active pool")]
    WordNotFound { word_id: WordId },

    /// The supplied pool cannot yield four distinct answer options.
    /// Fatal: the baseline catalog itself is too small.
    #[error("catalog too small: only {have} distinct translations available")]
    CatalogTooSmall { have: usize },
}
