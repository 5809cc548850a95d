//! Sequence generation.
//!
//! Two policies produce the target the player must reproduce:
//!
//! - **Fixed-range** (numbered recall): a Fisher-Yates shuffle of the whole
//!   pool, truncated to the current level. Position `i` in the result is the
//!   button labeled `i + 1`.
//! - **Incremental** (flash recall): the previous sequence extended by
//!   exactly one button chosen uniformly from the pool complement, so the
//!   sequence never contains a duplicate.
//!
//! Both refuse to request more distinct buttons than the pool holds;
//! the engine's `LevelCap` decides what that refusal means.

use rustc_hash::FxHashSet;

use crate::core::{ButtonId, GameRng, Sequence};
use crate::error::{RecallError, RecallResult};

/// Generate a fresh sequence of `level` distinct buttons.
///
/// Shuffles the full pool and keeps the first `level` entries, matching the
/// numbered-recall selection order: the first kept button is labeled 1.
pub fn fixed_range(level: usize, pool_size: usize, rng: &mut GameRng) -> RecallResult<Sequence> {
    if level > pool_size {
        return Err(RecallError::PoolExhausted {
            requested: level,
            pool_size,
        });
    }

    let mut pool: Vec<ButtonId> = ButtonId::pool(pool_size).collect();
    rng.shuffle(&mut pool);
    pool.truncate(level);

    Ok(pool.into_iter().collect())
}

/// Extend a sequence by one button not already present in it.
///
/// Chooses uniformly from the complement rather than rejection-sampling,
/// so a nearly-full pool still terminates in one draw. Returns the
/// appended button.
pub fn extend_incremental(
    sequence: &mut Sequence,
    pool_size: usize,
    rng: &mut GameRng,
) -> RecallResult<ButtonId> {
    if sequence.len() >= pool_size {
        return Err(RecallError::PoolExhausted {
            requested: sequence.len() + 1,
            pool_size,
        });
    }

    let used: FxHashSet<ButtonId> = sequence.iter().copied().collect();
    let available: Vec<ButtonId> = ButtonId::pool(pool_size)
        .filter(|id| !used.contains(id))
        .collect();

    // Non-empty by the length check above.
    let chosen = match rng.choose(&available) {
        Some(id) => *id,
        None => {
            return Err(RecallError::PoolExhausted {
                requested: sequence.len() + 1,
                pool_size,
            })
        }
    };

    sequence.push(chosen);
    Ok(chosen)
}

/// The numbered-recall label shown on a sequence button, if it is one.
///
/// Labels are 1-based positions in the sequence.
#[must_use]
pub fn label_of(sequence: &Sequence, button: ButtonId) -> Option<u16> {
    sequence
        .iter()
        .position(|b| *b == button)
        .map(|pos| pos as u16 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct(seq: &Sequence) -> bool {
        let set: FxHashSet<ButtonId> = seq.iter().copied().collect();
        set.len() == seq.len()
    }

    #[test]
    fn test_fixed_range_length_and_distinctness() {
        let mut rng = GameRng::new(42);
        for level in 1..=25 {
            let seq = fixed_range(level, 25, &mut rng).unwrap();
            assert_eq!(seq.len(), level);
            assert!(distinct(&seq));
            assert!(seq.iter().all(|b| b.in_pool(25)));
        }
    }

    #[test]
    fn test_fixed_range_pool_exhausted() {
        let mut rng = GameRng::new(42);
        let err = fixed_range(26, 25, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            RecallError::PoolExhausted {
                requested: 26,
                pool_size: 25
            }
        ));
    }

    #[test]
    fn test_fixed_range_full_pool() {
        let mut rng = GameRng::new(7);
        let seq = fixed_range(25, 25, &mut rng).unwrap();
        assert_eq!(seq.len(), 25);
        assert!(distinct(&seq));
    }

    #[test]
    fn test_extend_never_duplicates() {
        let mut rng = GameRng::new(42);
        let mut seq = Sequence::new();

        for expected_len in 1..=9 {
            let added = extend_incremental(&mut seq, 9, &mut rng).unwrap();
            assert_eq!(seq.len(), expected_len);
            assert_eq!(*seq.last().unwrap(), added);
            assert!(distinct(&seq));
        }
    }

    #[test]
    fn test_extend_exhausted_pool() {
        let mut rng = GameRng::new(42);
        let mut seq = Sequence::new();
        for _ in 0..4 {
            extend_incremental(&mut seq, 4, &mut rng).unwrap();
        }

        let err = extend_incremental(&mut seq, 4, &mut rng).unwrap_err();
        assert!(matches!(err, RecallError::PoolExhausted { .. }));
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_extend_last_slot_is_forced() {
        let mut rng = GameRng::new(1);
        let mut seq: Sequence = ButtonId::pool(3).take(2).collect();

        let added = extend_incremental(&mut seq, 3, &mut rng).unwrap();
        assert_eq!(added, ButtonId::new(2));
    }

    #[test]
    fn test_labels() {
        let mut rng = GameRng::new(42);
        let seq = fixed_range(3, 25, &mut rng).unwrap();

        assert_eq!(label_of(&seq, seq[0]), Some(1));
        assert_eq!(label_of(&seq, seq[1]), Some(2));
        assert_eq!(label_of(&seq, seq[2]), Some(3));

        let outside = ButtonId::pool(25).find(|b| !seq.contains(b)).unwrap();
        assert_eq!(label_of(&seq, outside), None);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        assert_eq!(
            fixed_range(10, 25, &mut rng1).unwrap(),
            fixed_range(10, 25, &mut rng2).unwrap()
        );
    }
}
