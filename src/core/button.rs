//! Button identification.
//!
//! Every cell in the grid is a `ButtonId`. The engine never touches the
//! rendering layer's actual widgets - it addresses them by ID through the
//! `Surface` trait and compares IDs for sequence validation.
//!
//! ## ID Layout
//!
//! IDs are grid indices in row-major order: `0..pool_size` where
//! `pool_size = grid_size * grid_size`. The layout is configured per game
//! via `EngineConfig`, not hardcoded.
//!
//! ## Usage
//!
//! ```
//! use recall_engine::core::ButtonId;
//!
//! let pool_size = 25; // 5x5 grid
//!
//! let first = ButtonId::new(0);
//! let last = ButtonId::new(24);
//!
//! assert!(first.in_pool(pool_size));
//! assert!(last.in_pool(pool_size));
//! assert!(!ButtonId::new(25).in_pool(pool_size));
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity of one grid button.
///
/// The rendering collaborator owns the widget; the engine owns the ID.
/// Equality on `ButtonId` is the only identity check validation performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ButtonId(pub u16);

impl ButtonId {
    /// Create a button ID from a grid index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw grid index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this ID addresses a button in a pool of the given size.
    #[must_use]
    pub const fn in_pool(self, pool_size: usize) -> bool {
        (self.0 as usize) < pool_size
    }

    /// Iterate over every button ID in a pool of the given size.
    ///
    /// ```
    /// use recall_engine::core::ButtonId;
    ///
    /// let pool: Vec<_> = ButtonId::pool(4).collect();
    /// assert_eq!(pool.len(), 4);
    /// assert_eq!(pool[0], ButtonId::new(0));
    /// assert_eq!(pool[3], ButtonId::new(3));
    /// ```
    pub fn pool(pool_size: usize) -> impl Iterator<Item = ButtonId> {
        (0..pool_size as u16).map(ButtonId)
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Button({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_id() {
        let id = ButtonId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{}", id), "Button(7)");
    }

    #[test]
    fn test_in_pool() {
        assert!(ButtonId::new(0).in_pool(1));
        assert!(ButtonId::new(24).in_pool(25));
        assert!(!ButtonId::new(25).in_pool(25));
        assert!(!ButtonId::new(0).in_pool(0));
    }

    #[test]
    fn test_pool_iteration() {
        let ids: Vec<_> = ButtonId::pool(25).collect();
        assert_eq!(ids.len(), 25);
        assert!(ids.iter().all(|id| id.in_pool(25)));
    }
}
