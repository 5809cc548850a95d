//! Rendering collaborator.
//!
//! The engine never builds widgets. Everything it wants shown goes through
//! the `Surface` trait: label text, highlight flashes, the mismatch alert,
//! score updates, and the game-over report. Embedders implement it over
//! their real UI; tests use `RecordingSurface` to assert on the exact call
//! sequence.

use serde::{Deserialize, Serialize};

use crate::core::ButtonId;

/// What a button highlight means, so surfaces can pick colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    /// Part of the sequence reveal (the original's blue).
    Reveal,
    /// Feedback for a correct click (green).
    Correct,
    /// Feedback for the game-ending wrong click (red).
    Wrong,
}

/// Rendering capability the engine is injected with.
///
/// All methods are fire-and-forget; the engine never reads the surface back.
pub trait Surface {
    /// Show a numbered label on a button.
    fn show_label(&mut self, button: ButtonId, label: u16);

    /// Clear every label on the grid.
    fn clear_labels(&mut self);

    /// Highlight a button.
    fn set_flash(&mut self, button: ButtonId, kind: FlashKind);

    /// Remove a button's highlight.
    fn clear_flash(&mut self, button: ButtonId);

    /// Tell the player something went wrong (numbered-recall mismatch).
    fn alert(&mut self, message: &str);

    /// The score changed.
    fn score_changed(&mut self, score: u32);

    /// The game ended; show the final and high scores.
    fn game_over(&mut self, final_score: u32, high_score: u32);
}

/// Surface that ignores everything. Useful for headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn show_label(&mut self, _button: ButtonId, _label: u16) {}
    fn clear_labels(&mut self) {}
    fn set_flash(&mut self, _button: ButtonId, _kind: FlashKind) {}
    fn clear_flash(&mut self, _button: ButtonId) {}
    fn alert(&mut self, _message: &str) {}
    fn score_changed(&mut self, _score: u32) {}
    fn game_over(&mut self, _final_score: u32, _high_score: u32) {}
}

/// One captured surface call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    ShowLabel(ButtonId, u16),
    ClearLabels,
    SetFlash(ButtonId, FlashKind),
    ClearFlash(ButtonId),
    Alert(String),
    ScoreChanged(u32),
    GameOver { final_score: u32, high_score: u32 },
}

/// Surface that records every call in order, for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// Captured calls, oldest first.
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything captured so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Count events matching a predicate.
    pub fn count(&self, pred: impl Fn(&SurfaceEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Surface for RecordingSurface {
    fn show_label(&mut self, button: ButtonId, label: u16) {
        self.events.push(SurfaceEvent::ShowLabel(button, label));
    }

    fn clear_labels(&mut self) {
        self.events.push(SurfaceEvent::ClearLabels);
    }

    fn set_flash(&mut self, button: ButtonId, kind: FlashKind) {
        self.events.push(SurfaceEvent::SetFlash(button, kind));
    }

    fn clear_flash(&mut self, button: ButtonId) {
        self.events.push(SurfaceEvent::ClearFlash(button));
    }

    fn alert(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Alert(message.to_string()));
    }

    fn score_changed(&mut self, score: u32) {
        self.events.push(SurfaceEvent::ScoreChanged(score));
    }

    fn game_over(&mut self, final_score: u32, high_score: u32) {
        self.events.push(SurfaceEvent::GameOver {
            final_score,
            high_score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order() {
        let mut surface = RecordingSurface::new();
        surface.set_flash(ButtonId::new(1), FlashKind::Reveal);
        surface.clear_flash(ButtonId::new(1));
        surface.score_changed(3);

        assert_eq!(
            surface.events,
            vec![
                SurfaceEvent::SetFlash(ButtonId::new(1), FlashKind::Reveal),
                SurfaceEvent::ClearFlash(ButtonId::new(1)),
                SurfaceEvent::ScoreChanged(3),
            ]
        );
    }

    #[test]
    fn test_count() {
        let mut surface = RecordingSurface::new();
        surface.set_flash(ButtonId::new(0), FlashKind::Reveal);
        surface.set_flash(ButtonId::new(1), FlashKind::Correct);

        let flashes = surface.count(|e| matches!(e, SurfaceEvent::SetFlash(..)));
        assert_eq!(flashes, 2);
    }

    #[test]
    fn test_null_surface_is_silent() {
        let mut surface = NullSurface;
        surface.alert("nothing happens");
        surface.game_over(1, 2);
    }
}
