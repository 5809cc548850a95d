//! The sequence-recall engine.
//!
//! One explicitly constructed instance owns all game state; there are no
//! module globals. The embedder drives it with two entry points:
//!
//! - `tick(now)`: apply every reveal step due at or before `now`
//! - `handle_click(button, now)`: validate one player click
//!
//! Both run to completion on the caller's thread. The phase gate is checked
//! synchronously inside `handle_click`, so the single-threaded dispatch
//! model of the original holds without locks.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    ButtonId, EngineConfig, GameRng, GameRngState, GameState, LevelCap, Phase, RecallPolicy,
    RoundEnd, Ticks,
};
use crate::error::{RecallError, RecallResult};
use crate::reveal::{self, RevealStep, Schedule, StepKind};
use crate::sequence;
use crate::store::ScoreStore;
use crate::surface::{FlashKind, Surface};

/// What one click did, so embedders can drive extra feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Input was gated (reveal in progress or game over); nothing happened.
    Ignored,
    /// Correct click; the round continues. `position` is the 0-based slot
    /// just filled.
    Progress {
        /// Sequence position the click satisfied.
        position: usize,
    },
    /// Correct click that finished the round.
    RoundComplete {
        /// Level the next round will ask for.
        next_level: u32,
    },
    /// Wrong click under the numbered policy: progress reset, level kept.
    Mismatch,
    /// Wrong click under the flash policy: terminal.
    GameOver {
        /// Score at the moment of failure.
        final_score: u32,
    },
}

/// Serializable engine checkpoint: state, RNG position, pending steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Game state at capture time.
    pub state: GameState,
    /// RNG position, so future rounds replay identically.
    pub rng: GameRngState,
    /// Steps that had not yet fired.
    pub schedule: Schedule,
}

/// Sequence-recall game engine, generic over rendering and persistence.
pub struct Engine<S: Surface, P: ScoreStore> {
    config: EngineConfig,
    state: GameState,
    rng: GameRng,
    schedule: Schedule,
    surface: S,
    store: P,
}

impl<S: Surface, P: ScoreStore> Engine<S, P> {
    /// Create an engine. Loads the persisted high score; a missing or
    /// unreadable value defaults to zero.
    pub fn new(config: EngineConfig, surface: S, store: P, seed: u64) -> RecallResult<Self> {
        config.validate()?;
        let high_score = store.load().unwrap_or(0);

        Ok(Self {
            config,
            state: GameState::new(high_score),
            rng: GameRng::new(seed),
            schedule: Schedule::new(),
            surface,
            store,
        })
    }

    /// Begin the first round and apply everything due at `now`.
    pub fn start(&mut self, now: Ticks) -> RecallResult<()> {
        self.begin_round(now)?;
        self.tick(now)
    }

    /// Apply every scheduled step due at or before `now`, in order.
    pub fn tick(&mut self, now: Ticks) -> RecallResult<()> {
        while let Some(step) = self.schedule.pop_due(now) {
            self.apply_step(step)?;
        }
        Ok(())
    }

    /// Validate one player click at virtual time `now`.
    ///
    /// Steps due by `now` fire first, exactly as an event loop would have
    /// run their timers before delivering the click.
    pub fn handle_click(&mut self, button: ButtonId, now: Ticks) -> RecallResult<ClickOutcome> {
        self.tick(now)?;

        if self.state.phase != Phase::AwaitingInput {
            trace!("click on {} ignored in {:?}", button, self.state.phase);
            return Ok(ClickOutcome::Ignored);
        }

        let outcome = match self.config.policy {
            RecallPolicy::Numbered => self.click_numbered(button, now)?,
            RecallPolicy::Flash => self.click_flash(button, now)?,
        };

        self.state.debug_invariants();
        // Anything the click scheduled for this instant fires in-call.
        self.tick(now)?;
        Ok(outcome)
    }

    /// Reset score, level, sequence, and progress, reload the high score,
    /// and start a fresh game. Pending steps are not cancelled; leftover
    /// flash-off timers simply run out.
    pub fn play_again(&mut self, now: Ticks) -> RecallResult<()> {
        debug!("play again: score reset from {}", self.state.score);
        self.state.reset();
        if let Some(stored) = self.store.load() {
            self.state.high_score = stored;
        }
        self.surface.score_changed(0);
        self.surface.clear_labels();
        self.begin_round(now)?;
        self.tick(now)
    }

    /// Clear the numbered labels early. UI sugar for the click-to-dismiss
    /// affordance; validation never depends on it.
    pub fn dismiss_labels(&mut self) {
        self.surface.clear_labels();
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The injected rendering surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface (tests drain recorded events).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The injected score store.
    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    /// When the next scheduled step fires, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Ticks> {
        self.schedule.next_due()
    }

    /// Capture a checkpoint of state, RNG, and pending steps.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
            schedule: self.schedule.clone(),
        }
    }

    /// Restore a checkpoint captured by `snapshot`.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state = snapshot.state;
        self.rng = GameRng::from_state(&snapshot.rng);
        self.schedule = snapshot.schedule;
    }

    // === Round lifecycle ===

    /// Generate the next sequence and schedule its reveal starting at
    /// `start`. Gate closes until the plan's `EnableInput` fires.
    fn begin_round(&mut self, start: Ticks) -> RecallResult<()> {
        self.state.phase = Phase::Reveal;
        self.state.progress.clear();
        let pool_size = self.config.pool_size();

        match self.config.policy {
            RecallPolicy::Numbered => {
                if self.state.level as usize > pool_size {
                    match self.config.level_cap {
                        LevelCap::Clamp => self.state.level = pool_size as u32,
                        LevelCap::Fail => {
                            return Err(RecallError::PoolExhausted {
                                requested: self.state.level as usize,
                                pool_size,
                            })
                        }
                    }
                }
                self.state.sequence =
                    sequence::fixed_range(self.state.level as usize, pool_size, &mut self.rng)?;
                self.schedule
                    .extend(reveal::plan_numbered_reveal(&self.state.sequence, start));
            }
            RecallPolicy::Flash => {
                if self.state.sequence.len() >= pool_size {
                    // Pool exhausted: clamp replays the full-pool sequence.
                    if self.config.level_cap == LevelCap::Fail {
                        return Err(RecallError::PoolExhausted {
                            requested: self.state.sequence.len() + 1,
                            pool_size,
                        });
                    }
                } else {
                    sequence::extend_incremental(&mut self.state.sequence, pool_size, &mut self.rng)?;
                }
                self.state.level = self.state.sequence.len() as u32;
                self.schedule.extend(reveal::plan_flash_reveal(
                    &self.state.sequence,
                    &self.config.timing,
                    start,
                ));
            }
        }

        debug!(
            "round started at {}: level {}, {} step(s) scheduled",
            start,
            self.state.level,
            self.schedule.len()
        );
        self.state.debug_invariants();
        Ok(())
    }

    fn apply_step(&mut self, step: RevealStep) -> RecallResult<()> {
        trace!("step at {}: {:?}", step.at, step.kind);
        match step.kind {
            StepKind::FlashOn(button, kind) => self.surface.set_flash(button, kind),
            StepKind::FlashOff(button) => self.surface.clear_flash(button),
            StepKind::ShowLabel(button, label) => self.surface.show_label(button, label),
            StepKind::ClearLabels => self.surface.clear_labels(),
            StepKind::EnableInput => {
                // Never reopens input after a game over.
                if self.state.phase == Phase::Reveal {
                    self.state.phase = Phase::AwaitingInput;
                    debug!("input enabled at {}", step.at);
                }
            }
            // New plans are anchored at the step's logical time, not the
            // tick's, so late ticks never skew the reveal timeline.
            StepKind::BeginRound => self.begin_round(step.at)?,
        }
        Ok(())
    }

    // === Click validation ===

    /// Numbered policy: the clicked button's label position must equal the
    /// progress length. A mismatch alerts and resets progress only.
    fn click_numbered(&mut self, button: ButtonId, now: Ticks) -> RecallResult<ClickOutcome> {
        let expected = self.state.progress_len();
        let clicked = self.state.sequence.iter().position(|b| *b == button);

        if clicked != Some(expected) {
            self.surface.alert("Incorrect sequence!");
            self.state.progress.clear();
            return Ok(ClickOutcome::Mismatch);
        }

        self.state.progress.push(button);
        if expected == 0 {
            // First correct click doubles as click-to-dismiss.
            self.surface.clear_labels();
        }

        if self.state.round_complete() {
            self.state.record_round(RoundEnd::Completed);
            self.state.level += 1;
            self.state.score += 1;
            self.surface.score_changed(self.state.score);
            let next_level = self.state.level;
            // Next round starts immediately; its labels land this tick.
            self.begin_round(now)?;
            return Ok(ClickOutcome::RoundComplete { next_level });
        }

        Ok(ClickOutcome::Progress { position: expected })
    }

    /// Flash policy: the clicked button must be `sequence[progress.len()]`.
    /// A mismatch is terminal.
    fn click_flash(&mut self, button: ButtonId, now: Ticks) -> RecallResult<ClickOutcome> {
        let position = self.state.progress_len();

        if self.state.sequence.get(position) != Some(&button) {
            self.surface.set_flash(button, FlashKind::Wrong);
            self.schedule.push(RevealStep {
                at: now + self.config.timing.feedback,
                kind: StepKind::FlashOff(button),
            });

            self.state.record_round(RoundEnd::Mismatch);
            self.state.phase = Phase::GameOver;
            if self.state.raise_high_score() {
                self.store.save(self.state.high_score)?;
            }
            self.surface
                .game_over(self.state.score, self.state.high_score);
            debug!(
                "game over: score {}, high score {}",
                self.state.score, self.state.high_score
            );
            return Ok(ClickOutcome::GameOver {
                final_score: self.state.score,
            });
        }

        self.state.progress.push(button);
        self.surface.set_flash(button, FlashKind::Correct);
        self.schedule.push(RevealStep {
            at: now + self.config.timing.feedback,
            kind: StepKind::FlashOff(button),
        });

        if self.state.round_complete() {
            self.state.phase = Phase::Reveal;
            self.state.score += 1;
            self.surface.score_changed(self.state.score);
            self.state.record_round(RoundEnd::Completed);
            self.state.progress.clear();
            let next_level = self.state.level + 1;
            self.schedule
                .extend(reveal::plan_next_round(&self.config.timing, now));
            return Ok(ClickOutcome::RoundComplete { next_level });
        }

        Ok(ClickOutcome::Progress { position })
    }
}
