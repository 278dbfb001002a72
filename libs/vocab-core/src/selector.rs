//! Error-weight-proportional word selection.

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::types::LearnerWord;

/// Draw one word with probability proportional to its error weight.
///
/// A word missed K times carries weight `baseline + K`, so it comes up
/// roughly proportionally more often. Equal weights reduce to a uniform
/// draw. Fails only on an empty candidate slice, which the recency
/// filter's fallback prevents whenever the active pool is non-empty.
pub fn pick<'a, R: Rng>(candidates: &[&'a LearnerWord], rng: &mut R) -> Result<&'a LearnerWord> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyPool);
    }

    let total: u64 = candidates
        .iter()
        .map(|word| u64::from(word.weight.max(1)))
        .sum();
    let mut roll = rng.gen_range(0..total);
    for word in candidates {
        let weight = u64::from(word.weight.max(1));
        if roll < weight {
            return Ok(word);
        }
        roll -= weight;
    }
    unreachable!("roll is bounded by the summed weights")
}
