//! Distractor generation: the three wrong options shown beside the
//! correct translation.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{EngineError, Result};
use crate::types::{Card, LearnerWord, OPTIONS_PER_CARD};

const DISTRACTORS_PER_CARD: usize = OPTIONS_PER_CARD - 1;

/// Build a four-option card for `target`.
///
/// Distractors are distinct translations drawn uniformly from `catalog`,
/// the learner's full word list, preferring same level+category peers,
/// then the same level, then the rest, so options stay contextually
/// plausible without blocking on a small category. The correct option's
/// slot is uniformly random per call. Fails with `CatalogTooSmall` when
/// the catalog holds fewer than four distinct translations in total.
pub fn build_card<R: Rng>(
    target: &LearnerWord,
    catalog: &[LearnerWord],
    rng: &mut R,
) -> Result<Card> {
    let distractors = pick_distractors(target, catalog, rng)?;

    let slot = rng.gen_range(0..OPTIONS_PER_CARD);
    let mut options = distractors;
    options.insert(slot, target.translation.clone());

    Ok(Card {
        word_id: target.id,
        prompt: target.text.clone(),
        options,
    })
}

/// Three distinct wrong translations, nearest context first.
fn pick_distractors<R: Rng>(
    target: &LearnerWord,
    catalog: &[LearnerWord],
    rng: &mut R,
) -> Result<Vec<String>> {
    // Tier 0: same level and category, tier 1: same level, tier 2: rest.
    let mut tiers: [Vec<&str>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(target.translation.to_lowercase());

    for word in catalog {
        if !seen.insert(word.translation.to_lowercase()) {
            continue;
        }
        let tier = if word.level == target.level && word.category == target.category {
            0
        } else if word.level == target.level {
            1
        } else {
            2
        };
        tiers[tier].push(&word.translation);
    }

    let mut chosen: Vec<String> = Vec::with_capacity(DISTRACTORS_PER_CARD);
    for tier in &tiers {
        if chosen.len() == DISTRACTORS_PER_CARD {
            break;
        }
        let need = DISTRACTORS_PER_CARD - chosen.len();
        chosen.extend(
            tier.choose_multiple(rng, need)
                .map(|translation| translation.to_string()),
        );
    }

    if chosen.len() < DISTRACTORS_PER_CARD {
        return Err(EngineError::CatalogTooSmall {
            have: chosen.len() + 1,
        });
    }
    Ok(chosen)
}
