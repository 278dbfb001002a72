//! Recency window: the last few words a learner has passed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::{LearnerWord, WordId};

/// Maximum number of recently passed words excluded from re-selection.
pub const RECENCY_CAPACITY: usize = 3;

/// Bounded, ordered queue of the last passed word ids.
///
/// Holds at most [`RECENCY_CAPACITY`] entries with no duplicates; pushing
/// an existing id moves it to the back, pushing past capacity evicts the
/// oldest entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecencyWindow {
    entries: VecDeque<WordId>,
}

impl RecencyWindow {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(RECENCY_CAPACITY),
        }
    }

    pub fn push(&mut self, id: WordId) {
        self.entries.retain(|&seen| seen != id);
        self.entries.push_back(id);
        if self.entries.len() > RECENCY_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn contains(&self, id: WordId) -> bool {
        self.entries.contains(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest-first iteration over the window.
    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.entries.iter().copied()
    }
}

/// Filter `candidates` down to words outside the recency window.
///
/// Falls back to the unfiltered list when every candidate is recent, so a
/// category with three or fewer words can still make progress.
pub fn admit<'a>(candidates: Vec<&'a LearnerWord>, recent: &RecencyWindow) -> Vec<&'a LearnerWord> {
    if recent.is_empty() {
        return candidates;
    }
    let filtered: Vec<&LearnerWord> = candidates
        .iter()
        .copied()
        .filter(|word| !recent.contains(word.id))
        .collect();
    if filtered.is_empty() {
        candidates
    } else {
        filtered
    }
}
