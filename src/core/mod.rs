//! Core engine types: buttons, time, state, RNG, configuration.
//!
//! This module contains the fundamental building blocks shared by both
//! recall policies. Embedders configure these via `EngineConfig` rather
//! than modifying the core.

pub mod button;
pub mod config;
pub mod rng;
pub mod state;
pub mod time;

pub use button::ButtonId;
pub use config::{EngineConfig, LevelCap, RecallPolicy, RevealTiming};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, RoundEnd, RoundRecord, Sequence};
pub use time::Ticks;
