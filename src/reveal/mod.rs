//! Reveal scheduling.
//!
//! The original chained nested timer callbacks; here a reveal is an explicit
//! ordered list of timed steps. Planning functions turn a sequence plus
//! timing knobs into `RevealStep`s with absolute due times, and a single
//! `Schedule` drains whatever is due each `tick`. Nothing here touches the
//! clock - the engine passes `now` in.
//!
//! Steps are never cancelled: once planned they run to completion, and input
//! stays gated until the plan's `EnableInput` fires.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ButtonId, RevealTiming, Sequence, Ticks};
use crate::surface::FlashKind;

/// What a due step does when the engine applies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Highlight a button.
    FlashOn(ButtonId, FlashKind),
    /// Revert a button's highlight.
    FlashOff(ButtonId),
    /// Show a numbered label on a button.
    ShowLabel(ButtonId, u16),
    /// Clear every label on the grid.
    ClearLabels,
    /// Open the input gate: phase becomes `AwaitingInput`.
    EnableInput,
    /// Generate and reveal the next round's sequence.
    BeginRound,
}

/// One timed reveal action with an absolute due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    /// Virtual time at which the step fires.
    pub at: Ticks,
    /// What firing it does.
    pub kind: StepKind,
}

/// An ordered batch of steps produced by one planning call.
/// Inline capacity covers a reveal of 7 elements plus the input gate.
pub type RevealPlan = SmallVec<[RevealStep; 16]>;

/// Plan a flash reveal: element `i` highlights at `start + spacing * i` for
/// `flash` ticks, and input opens `input_buffer` after the last slot.
#[must_use]
pub fn plan_flash_reveal(sequence: &Sequence, timing: &RevealTiming, start: Ticks) -> RevealPlan {
    let mut plan = RevealPlan::new();

    for (i, &button) in sequence.iter().enumerate() {
        let on = start + timing.spacing * i as u64;
        plan.push(RevealStep {
            at: on,
            kind: StepKind::FlashOn(button, FlashKind::Reveal),
        });
        plan.push(RevealStep {
            at: on + timing.flash,
            kind: StepKind::FlashOff(button),
        });
    }

    plan.push(RevealStep {
        at: start + timing.spacing * sequence.len() as u64 + timing.input_buffer,
        kind: StepKind::EnableInput,
    });

    plan
}

/// Plan a numbered reveal: all labels appear at once and input opens
/// immediately. The labels stay up until cleared by the first correct click
/// (or `Engine::dismiss_labels`).
#[must_use]
pub fn plan_numbered_reveal(sequence: &Sequence, start: Ticks) -> RevealPlan {
    let mut plan = RevealPlan::new();

    for (i, &button) in sequence.iter().enumerate() {
        plan.push(RevealStep {
            at: start,
            kind: StepKind::ShowLabel(button, i as u16 + 1),
        });
    }

    plan.push(RevealStep {
        at: start,
        kind: StepKind::EnableInput,
    });

    plan
}

/// Plan the delayed start of the next round.
#[must_use]
pub fn plan_next_round(timing: &RevealTiming, start: Ticks) -> RevealPlan {
    let mut plan = RevealPlan::new();
    plan.push(RevealStep {
        at: start + timing.next_round_delay,
        kind: StepKind::BeginRound,
    });
    plan
}

/// Pending timed steps, ordered by due time.
///
/// Steps with equal due times fire in insertion order, which preserves the
/// within-plan ordering planners rely on (flash-on before flash-off, labels
/// before the input gate).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Schedule {
    steps: Vec<RevealStep>,
}

impl Schedule {
    /// Create an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of pending steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// When the next step fires, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Ticks> {
        self.steps.first().map(|s| s.at)
    }

    /// Insert one step, keeping due-time order (FIFO among equals).
    pub fn push(&mut self, step: RevealStep) {
        let idx = self.steps.partition_point(|s| s.at <= step.at);
        self.steps.insert(idx, step);
    }

    /// Insert a whole plan.
    pub fn extend(&mut self, plan: RevealPlan) {
        for step in plan {
            self.push(step);
        }
    }

    /// Remove and return the earliest step due at or before `now`.
    ///
    /// Call in a loop to drain everything due this tick.
    pub fn pop_due(&mut self, now: Ticks) -> Option<RevealStep> {
        match self.steps.first() {
            Some(step) if step.at <= now => Some(self.steps.remove(0)),
            _ => None,
        }
    }

    /// Drop everything pending.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
