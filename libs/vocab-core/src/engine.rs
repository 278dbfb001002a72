//! Card lifecycle: selection, answering, skipping.
//!
//! A single card moves through `Pending -> {Correct, Skipped}` terminal
//! states; an incorrect answer keeps the card pending with its error
//! weight incremented, so it is re-presented on the next call.

use rand::Rng;

use crate::distractor;
use crate::error::{EngineError, Result};
use crate::recency;
use crate::selector;
use crate::session::StudySession;
use crate::types::{Card, LearnerWord, Outcome, WordId};

/// Select the next card for a learner.
///
/// The target is always drawn from `pool`, the words of the active level
/// and category. Distractors come from `catalog`, the learner's whole
/// word list, so a two-word category still fills its card by borrowing
/// translations from neighboring categories and levels.
///
/// An unanswered pending card is re-presented with freshly drawn options;
/// otherwise candidates outside the recency window are weighted by error
/// count and one is drawn. Fails with `EmptyPool` when the pool is empty
/// and `CatalogTooSmall` when even the full catalog cannot yield four
/// distinct options.
pub fn next_card<R: Rng>(
    pool: &[LearnerWord],
    catalog: &[LearnerWord],
    session: &mut StudySession,
    rng: &mut R,
) -> Result<Card> {
    if pool.is_empty() {
        return Err(EngineError::EmptyPool);
    }

    if let Some(pending_id) = session.pending() {
        if let Some(word) = pool.iter().find(|w| w.id == pending_id) {
            return distractor::build_card(word, catalog, rng);
        }
        // Pending word was removed from the pool; fall through to a
        // fresh selection.
    }

    let candidates = recency::admit(pool.iter().collect(), session.recency());
    let target = selector::pick(&candidates, rng)?;
    let card = distractor::build_card(target, catalog, rng)?;
    session.set_pending(target.id);
    Ok(card)
}

/// Process a submitted answer for `word_id`.
///
/// Correct: the word rotates into the recency window, weight untouched.
/// Incorrect: the word's error weight is incremented and the card stays
/// pending. Comparison is case-insensitive and whitespace-trimmed.
pub fn answer(
    pool: &mut [LearnerWord],
    session: &mut StudySession,
    word_id: WordId,
    chosen: &str,
) -> Result<Outcome> {
    let word = pool
        .iter_mut()
        .find(|w| w.id == word_id)
        .ok_or(EngineError::WordNotFound { word_id })?;

    if chosen.trim().to_lowercase() == word.translation.trim().to_lowercase() {
        session.pass(word_id);
        Ok(Outcome::Correct)
    } else {
        word.weight = word.weight.saturating_add(1);
        Ok(Outcome::Incorrect)
    }
}

/// Skip the card for `word_id` without answering.
///
/// Behaves like a pass for recency purposes but never touches the error
/// weight.
pub fn skip(pool: &[LearnerWord], session: &mut StudySession, word_id: WordId) -> Result<Outcome> {
    if !pool.iter().any(|w| w.id == word_id) {
        return Err(EngineError::WordNotFound { word_id });
    }
    session.pass(word_id);
    Ok(Outcome::Skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordKind;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(id: WordId, text: &str, translation: &str) -> LearnerWord {
        LearnerWord {
            id,
            text: text.to_string(),
            translation: translation.to_string(),
            level: 3,
            category: "мебель".to_string(),
            kind: WordKind::Baseline,
            weight: 1,
        }
    }

    fn furniture_pool() -> Vec<LearnerWord> {
        vec![
            word(1, "стол", "table"),
            word(2, "стул", "chair"),
            word(3, "окно", "window"),
            word(4, "дверь", "door"),
        ]
    }

    fn numbers_pool() -> Vec<LearnerWord> {
        vec![
            LearnerWord {
                id: 11,
                text: "один".to_string(),
                translation: "one".to_string(),
                level: 1,
                category: "числа".to_string(),
                kind: WordKind::Baseline,
                weight: 1,
            },
            LearnerWord {
                id: 12,
                text: "два".to_string(),
                translation: "two".to_string(),
                level: 1,
                category: "числа".to_string(),
                kind: WordKind::Baseline,
                weight: 1,
            },
            LearnerWord {
                id: 13,
                text: "три".to_string(),
                translation: "three".to_string(),
                level: 1,
                category: "числа".to_string(),
                kind: WordKind::Baseline,
                weight: 1,
            },
        ]
    }

    #[test]
    fn empty_pool_is_an_error() {
        let catalog = furniture_pool();
        let mut session = StudySession::new(3, "мебель");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            next_card(&[], &catalog, &mut session, &mut rng),
            Err(EngineError::EmptyPool)
        );
    }

    #[test]
    fn wrong_then_right_scenario() {
        let mut pool = furniture_pool();
        let catalog = pool.clone();
        let mut session = StudySession::new(3, "мебель");
        let mut rng = StdRng::seed_from_u64(2);

        let card = next_card(&pool, &catalog, &mut session, &mut rng).unwrap();
        assert_eq!(card.options.len(), 4);
        assert!(pool.iter().any(|w| w.id == card.word_id));

        // Force the scenario onto "стол" regardless of the draw.
        session.switch_context(3, "одежда");
        session.switch_context(3, "мебель");
        session.set_pending(1);

        let outcome = answer(&mut pool, &mut session, 1, "chair").unwrap();
        assert_eq!(outcome, Outcome::Incorrect);
        assert_eq!(pool[0].weight, 2);
        assert_eq!(session.pending(), Some(1));

        // The pending card is re-presented, not rotated out.
        let repeat = next_card(&pool, &catalog, &mut session, &mut rng).unwrap();
        assert_eq!(repeat.word_id, 1);

        let outcome = answer(&mut pool, &mut session, 1, "table").unwrap();
        assert_eq!(outcome, Outcome::Correct);
        assert_eq!(pool[0].weight, 2);
        assert_eq!(session.pending(), None);
        assert_eq!(session.recency().iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn incorrect_leaves_other_weights_unchanged() {
        let mut pool = furniture_pool();
        let mut session = StudySession::new(3, "мебель");
        session.set_pending(2);

        answer(&mut pool, &mut session, 2, "nonsense").unwrap();
        assert_eq!(pool[1].weight, 2);
        for other in [0, 2, 3] {
            assert_eq!(pool[other].weight, 1);
        }
    }

    #[test]
    fn recent_words_are_never_reselected_in_large_pool() {
        let mut pool = furniture_pool();
        pool.push(word(5, "шкаф", "wardrobe"));

        let mut session = StudySession::new(3, "мебель");
        let mut rng = StdRng::seed_from_u64(3);
        for id in [1, 2, 3] {
            skip(&pool, &mut session, id).unwrap();
        }

        for _ in 0..100 {
            let card = next_card(&pool, &pool, &mut session, &mut rng).unwrap();
            assert!(
                card.word_id == 4 || card.word_id == 5,
                "recent word {} reselected",
                card.word_id
            );
            skip(&pool, &mut session, card.word_id).unwrap();
            // Keep the original three in the window for the next round.
            session.switch_context(3, "одежда");
            session.switch_context(3, "мебель");
            for id in [1, 2, 3] {
                skip(&pool, &mut session, id).unwrap();
            }
        }
    }

    #[test]
    fn tiny_pool_still_makes_progress() {
        // Three words fit entirely inside the recency window, so every
        // draw runs through the recency fallback.
        let mut pool = numbers_pool();
        let mut catalog = numbers_pool();
        catalog.extend(furniture_pool());
        let mut session = StudySession::new(1, "числа");
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..20 {
            let card = next_card(&pool, &catalog, &mut session, &mut rng).unwrap();
            let correct = pool
                .iter()
                .find(|w| w.id == card.word_id)
                .unwrap()
                .translation
                .clone();
            let outcome = answer(&mut pool, &mut session, card.word_id, &correct).unwrap();
            assert_eq!(outcome, Outcome::Correct);
        }
    }

    #[test]
    fn small_category_borrows_distractors_from_catalog() {
        // A three-word category cannot fill a card on its own; the wider
        // catalog supplies the missing options while the target stays
        // inside the active category.
        let pool = numbers_pool();
        let mut catalog = numbers_pool();
        catalog.extend(furniture_pool());
        let mut session = StudySession::new(1, "числа");
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..50 {
            let card = next_card(&pool, &catalog, &mut session, &mut rng).unwrap();
            assert_eq!(card.options.len(), 4);
            assert!(pool.iter().any(|w| w.id == card.word_id));

            let target = pool.iter().find(|w| w.id == card.word_id).unwrap();
            assert_eq!(
                card.options
                    .iter()
                    .filter(|o| **o == target.translation)
                    .count(),
                1
            );
            session.switch_context(1, "цвета");
            session.switch_context(1, "числа");
        }
    }

    #[test]
    fn undersized_catalog_is_fatal() {
        // Only when the learner's entire catalog lacks four distinct
        // translations does selection fail.
        let pool = numbers_pool();
        let mut session = StudySession::new(1, "числа");
        let mut rng = StdRng::seed_from_u64(10);

        assert_eq!(
            next_card(&pool, &pool, &mut session, &mut rng),
            Err(EngineError::CatalogTooSmall { have: 3 })
        );
    }

    #[test]
    fn skip_rotates_without_touching_weight() {
        let pool = furniture_pool();
        let mut session = StudySession::new(3, "мебель");
        session.set_pending(1);

        let outcome = skip(&pool, &mut session, 1).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(session.pending(), None);
        assert!(session.recency().contains(1));
        assert_eq!(pool[0].weight, 1);
    }

    #[test]
    fn unknown_word_is_not_found() {
        let mut pool = furniture_pool();
        let mut session = StudySession::new(3, "мебель");
        assert_eq!(
            answer(&mut pool, &mut session, 99, "table"),
            Err(EngineError::WordNotFound { word_id: 99 })
        );
        assert_eq!(
            skip(&pool, &mut session, 99),
            Err(EngineError::WordNotFound { word_id: 99 })
        );
    }

    #[test]
    fn answer_matching_is_case_insensitive() {
        let mut pool = furniture_pool();
        let mut session = StudySession::new(3, "мебель");
        session.set_pending(1);

        let outcome = answer(&mut pool, &mut session, 1, "  TABLE ").unwrap();
        assert_eq!(outcome, Outcome::Correct);
    }
}
