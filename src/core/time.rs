//! Virtual clock ticks.
//!
//! The engine never sleeps and never reads a wall clock. Every timed
//! behavior (reveal flashes, input gating, feedback, round spacing) is
//! expressed as an absolute `Ticks` value: the embedder supplies the
//! current time to `tick` and `handle_click`, and tests drive it with
//! synthetic values.
//!
//! One tick is one millisecond by convention; the engine only ever
//! compares and adds ticks, so the unit is the embedder's choice.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// A point (or span) on the virtual timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticks(pub u64);

impl Ticks {
    /// Time zero.
    pub const ZERO: Ticks = Ticks(0);

    /// Create a tick value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw tick count.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Add for Ticks {
    type Output = Ticks;

    fn add(self, rhs: Ticks) -> Ticks {
        Ticks(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Ticks {
    fn add_assign(&mut self, rhs: Ticks) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u64> for Ticks {
    type Output = Ticks;

    fn mul(self, rhs: u64) -> Ticks {
        Ticks(self.0.saturating_mul(rhs))
    }
}

impl std::fmt::Display for Ticks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
