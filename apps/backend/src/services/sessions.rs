//! In-memory session table keyed by learner id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;
use vocab_core::StudySession;

/// Hands out one lockable study session per learner.
///
/// The outer map lock is held only for the lookup. Handlers hold the
/// per-learner lock for the whole request, so concurrent events for the
/// same learner are processed strictly one at a time while different
/// learners proceed in parallel.
#[derive(Default)]
pub struct SessionMap {
    inner: Mutex<HashMap<Uuid, Arc<AsyncMutex<StudySession>>>>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the learner's session, creating it on first contact with the
    /// given context.
    pub fn session(
        &self,
        learner_id: Uuid,
        level: i32,
        category: &str,
    ) -> Arc<AsyncMutex<StudySession>> {
        let mut map = self.inner.lock().expect("session map mutex poisoned");
        map.entry(learner_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(StudySession::new(level, category))))
            .clone()
    }

    /// Drop a learner's session (logout / account teardown).
    pub fn remove(&self, learner_id: Uuid) {
        let mut map = self.inner.lock().expect("session map mutex poisoned");
        map.remove(&learner_id);
    }
}
