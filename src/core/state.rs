//! Game state: phase, progression, and round history.
//!
//! ## Phase
//!
//! The `playerTurn` gate of the original, widened into three phases:
//! input is only accepted in `AwaitingInput`, and `GameOver` is terminal
//! until `play_again`.
//!
//! ## GameState
//!
//! Everything the validator and progression logic read or write:
//! level, score, high score, the live sequence, the player's progress,
//! and a persistent history of finished rounds.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::button::ButtonId;

/// A target or progress sequence. Inline up to 8 elements; recall games
/// rarely get much past that before a mismatch.
pub type Sequence = SmallVec<[ButtonId; 8]>;

/// Where the engine is in the round lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The sequence is being shown (or the next round is pending).
    /// Clicks are ignored.
    #[default]
    Reveal,
    /// The player is reproducing the sequence.
    AwaitingInput,
    /// Terminal until `play_again` (flash policy only).
    GameOver,
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// The full sequence was reproduced in order.
    Completed,
    /// A wrong button ended the attempt.
    Mismatch,
}

/// One finished round, recorded for inspection and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Sequence length that was being recalled.
    pub level: u32,
    /// The target the player was reproducing.
    pub sequence: Sequence,
    /// How the round ended.
    pub outcome: RoundEnd,
}

/// Complete mutable game state.
///
/// Invariants (checked by `debug_invariants`):
/// - `progress.len() <= sequence.len()`
/// - `high_score >= score` never decreases
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Round lifecycle phase.
    pub phase: Phase,

    /// Current required sequence length. Starts at 1.
    pub level: u32,

    /// Completed rounds this game. Resets on `play_again`.
    pub score: u32,

    /// Monotonic maximum score across sessions.
    pub high_score: u32,

    /// The ordered target the player must reproduce.
    pub sequence: Sequence,

    /// The player's clicks so far this round, in order.
    pub progress: Sequence,

    /// Finished rounds, oldest first. Persistent vector keeps history
    /// snapshots cheap to clone.
    pub history: Vector<RoundRecord>,
}

impl GameState {
    /// Fresh state at level 1 with the given persisted high score.
    #[must_use]
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: Phase::Reveal,
            level: 1,
            score: 0,
            high_score,
            sequence: Sequence::new(),
            progress: Sequence::new(),
            history: Vector::new(),
        }
    }

    /// How many clicks the player has made this round.
    #[must_use]
    pub fn progress_len(&self) -> usize {
        self.progress.len()
    }

    /// True once progress covers the whole sequence.
    #[must_use]
    pub fn round_complete(&self) -> bool {
        !self.sequence.is_empty() && self.progress.len() == self.sequence.len()
    }

    /// Record a finished round in the history.
    pub fn record_round(&mut self, outcome: RoundEnd) {
        self.history.push_back(RoundRecord {
            level: self.level,
            sequence: self.sequence.clone(),
            outcome,
        });
    }

    /// Raise the high score if the current score beats it.
    ///
    /// Returns true if the high score changed.
    pub fn raise_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Zero everything for a new game, keeping high score and history.
    pub fn reset(&mut self) {
        self.phase = Phase::Reveal;
        self.level = 1;
        self.score = 0;
        self.sequence.clear();
        self.progress.clear();
    }

    /// Debug-only invariant checks, run after every mutation in the engine.
    pub fn debug_invariants(&self) {
        debug_assert!(
            self.progress.len() <= self.sequence.len() || self.sequence.is_empty(),
            "progress ({}) outran sequence ({})",
            self.progress.len(),
            self.sequence.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, Phase::Reveal);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 7);
        assert!(state.sequence.is_empty());
        assert!(state.progress.is_empty());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_round_complete() {
        let mut state = GameState::new(0);
        assert!(!state.round_complete());

        state.sequence.push(ButtonId::new(3));
        assert!(!state.round_complete());

        state.progress.push(ButtonId::new(3));
        assert!(state.round_complete());
    }

    #[test]
    fn test_raise_high_score() {
        let mut state = GameState::new(5);

        state.score = 3;
        assert!(!state.raise_high_score());
        assert_eq!(state.high_score, 5);

        state.score = 9;
        assert!(state.raise_high_score());
        assert_eq!(state.high_score, 9);

        // Equal score does not count as an improvement
        state.score = 9;
        assert!(!state.raise_high_score());
    }

    #[test]
    fn test_reset_keeps_high_score_and_history() {
        let mut state = GameState::new(0);
        state.sequence.push(ButtonId::new(1));
        state.progress.push(ButtonId::new(1));
        state.score = 4;
        state.high_score = 4;
        state.record_round(RoundEnd::Completed);
        state.phase = Phase::GameOver;

        state.reset();

        assert_eq!(state.phase, Phase::Reveal);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 4);
        assert!(state.sequence.is_empty());
        assert!(state.progress.is_empty());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_record_round() {
        let mut state = GameState::new(0);
        state.level = 2;
        state.sequence.push(ButtonId::new(0));
        state.sequence.push(ButtonId::new(5));
        state.record_round(RoundEnd::Mismatch);

        let record = state.history.back().unwrap();
        assert_eq!(record.level, 2);
        assert_eq!(record.sequence.len(), 2);
        assert_eq!(record.outcome, RoundEnd::Mismatch);
    }

    #[test]
    fn test_state_serde() {
        let mut state = GameState::new(3);
        state.sequence.push(ButtonId::new(2));
        state.record_round(RoundEnd::Completed);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.high_score, 3);
        assert_eq!(back.sequence, state.sequence);
        assert_eq!(back.history.len(), 1);
    }
}
