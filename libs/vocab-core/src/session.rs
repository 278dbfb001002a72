//! Per-learner study session state.

use serde::{Deserialize, Serialize};

use crate::recency::RecencyWindow;
use crate::types::WordId;

/// Mutable study state for a single learner.
///
/// One session exists per learner, created on first contact and passed
/// explicitly into every engine call. The caller must serialize access so
/// two concurrent submissions for the same learner cannot race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    level: i32,
    category: String,
    recency: RecencyWindow,
    pending: Option<WordId>,
}

impl StudySession {
    pub fn new(level: i32, category: impl Into<String>) -> Self {
        Self {
            level,
            category: category.into(),
            recency: RecencyWindow::new(),
            pending: None,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn matches_context(&self, level: i32, category: &str) -> bool {
        self.level == level && self.category == category
    }

    /// Switch the active level/category. A switch invalidates the
    /// "recently shown" context, so the recency window and any pending
    /// card are cleared. Switching to the current context is a no-op.
    pub fn switch_context(&mut self, level: i32, category: impl Into<String>) {
        let category = category.into();
        if self.matches_context(level, &category) {
            return;
        }
        self.level = level;
        self.category = category;
        self.recency.clear();
        self.pending = None;
    }

    /// The card currently on the table, if any.
    pub fn pending(&self) -> Option<WordId> {
        self.pending
    }

    pub fn recency(&self) -> &RecencyWindow {
        &self.recency
    }

    pub(crate) fn set_pending(&mut self, word_id: WordId) {
        self.pending = Some(word_id);
    }

    /// Rotate a passed card out: push it into the recency window and clear
    /// the pending slot.
    pub(crate) fn pass(&mut self, word_id: WordId) {
        self.recency.push(word_id);
        if self.pending == Some(word_id) {
            self.pending = None;
        }
    }
}
