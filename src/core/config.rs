//! Engine configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `RecallPolicy`: how sequences grow and what a mismatch costs
//! - `LevelCap`: what happens when the level would exceed the pool
//! - `RevealTiming`: all reveal and feedback timing knobs
//! - `EngineConfig`: combines all configuration
//!
//! The engine never hardcodes grid sizes or delays - embedders define them.

use serde::{Deserialize, Serialize};

use super::time::Ticks;
use crate::error::{RecallError, RecallResult};

/// Recall policy: how the target sequence is produced each round and what
/// happens on a wrong click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallPolicy {
    /// A random distinct subset of the pool is labeled `1..=level`; the
    /// player clicks in ascending label order. A mismatch resets progress
    /// but keeps the level (recoverable).
    Numbered,
    /// The sequence grows by one random distinct button per round; each
    /// element flashes in order before input opens. A mismatch is terminal.
    Flash,
}

/// What to do when the level would require more distinct buttons than the
/// pool contains.
///
/// The original game left this unguarded; the generator here refuses to
/// produce an over-long sequence, and this setting decides the consequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelCap {
    /// Hold the level at pool size and keep playing.
    #[default]
    Clamp,
    /// Surface `RecallError::PoolExhausted` to the embedder.
    Fail,
}

/// Timing knobs for reveals and click feedback, in virtual ticks.
///
/// Defaults match the original game's constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTiming {
    /// How long each sequence element stays highlighted during a reveal.
    pub flash: Ticks,

    /// Spacing between the starts of consecutive reveal flashes.
    pub spacing: Ticks,

    /// Gap between the end of the reveal and input being accepted.
    pub input_buffer: Ticks,

    /// How long the green/red click feedback stays on a button.
    pub feedback: Ticks,

    /// Delay between completing a round and the next reveal starting.
    pub next_round_delay: Ticks,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            flash: Ticks::new(500),
            spacing: Ticks::new(1000),
            input_buffer: Ticks::new(50),
            feedback: Ticks::new(300),
            next_round_delay: Ticks::new(200),
        }
    }
}

/// Complete engine configuration.
///
/// Embedders provide this at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid side length; the pool holds `grid_size * grid_size` buttons.
    pub grid_size: usize,

    /// How sequences are produced and mismatches handled.
    pub policy: RecallPolicy,

    /// Level behavior at pool exhaustion.
    pub level_cap: LevelCap,

    /// Reveal and feedback timing.
    pub timing: RevealTiming,
}

impl EngineConfig {
    /// Create a configuration for a square grid with the given policy.
    #[must_use]
    pub fn new(grid_size: usize, policy: RecallPolicy) -> Self {
        Self {
            grid_size,
            policy,
            level_cap: LevelCap::default(),
            timing: RevealTiming::default(),
        }
    }

    /// Set the level-cap behavior.
    #[must_use]
    pub fn with_level_cap(mut self, cap: LevelCap) -> Self {
        self.level_cap = cap;
        self
    }

    /// Set the reveal timing.
    #[must_use]
    pub fn with_timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Number of buttons in the pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Check the configuration for impossible values.
    pub fn validate(&self) -> RecallResult<()> {
        if self.grid_size == 0 {
            return Err(RecallError::InvalidConfig {
                reason: "grid_size must be at least 1".to_string(),
            });
        }
        if self.pool_size() > u16::MAX as usize {
            return Err(RecallError::InvalidConfig {
                reason: format!("pool size {} exceeds button ID range", self.pool_size()),
            });
        }
        Ok(())
    }
}
