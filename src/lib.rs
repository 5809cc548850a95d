//! # recall-engine
//!
//! A sequence-recall ("chimp test") memory game engine.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: The engine is an explicitly constructed instance
//!    with owned fields and an explicit reset, never module globals.
//!
//! 2. **Presentation-Agnostic**: Rendering and persistence are capability
//!    traits (`Surface`, `ScoreStore`) injected at construction. The engine
//!    addresses buttons by `ButtonId` and never touches a widget.
//!
//! 3. **Virtual Time**: Reveals are data - ordered lists of timed steps
//!    drained by `tick(now)`. Tests drive the clock; nothing sleeps.
//!
//! ## Architecture
//!
//! **Sequence Generator → Reveal Scheduler → Input Validator →
//! Progression/Reset**, over a fixed pool of `grid_size * grid_size`
//! buttons. Two recall policies share the pipeline:
//!
//! - `RecallPolicy::Numbered`: a shuffled subset of the pool is labeled
//!   `1..=level`; click in ascending label order. Mistakes are recoverable.
//! - `RecallPolicy::Flash`: the sequence grows by one button per round and
//!   is flashed in order before input opens. A mistake ends the game and
//!   the high score is persisted.
//!
//! ## Modules
//!
//! - `core`: Button IDs, virtual time, state, RNG, configuration
//! - `sequence`: Fixed-range and incremental sequence generation
//! - `reveal`: Timed reveal steps and the schedule that drains them
//! - `engine`: The click-validation state machine and round progression
//! - `surface`: Rendering capability trait plus null/recording impls
//! - `store`: High-score persistence trait plus memory/file impls
//! - `error`: Unified error type

pub mod core;
pub mod engine;
pub mod error;
pub mod reveal;
pub mod sequence;
pub mod store;
pub mod surface;

// Re-export commonly used types
pub use crate::core::{
    ButtonId, EngineConfig, GameRng, GameRngState, GameState, LevelCap, Phase, RecallPolicy,
    RevealTiming, RoundEnd, RoundRecord, Sequence, Ticks,
};

pub use crate::engine::{ClickOutcome, Engine, Snapshot};

pub use crate::error::{RecallError, RecallResult};

pub use crate::reveal::{RevealPlan, RevealStep, Schedule, StepKind};

pub use crate::store::{FileStore, MemoryStore, ScoreStore};

pub use crate::surface::{FlashKind, NullSurface, RecordingSurface, Surface, SurfaceEvent};
