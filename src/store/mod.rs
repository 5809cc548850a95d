//! High-score persistence collaborator.
//!
//! The original kept its high score as a string under a localStorage key.
//! The engine only needs that much: load an integer if one was ever saved,
//! save one when it improves. A missing or unreadable value is absence,
//! never an error.

use std::fs;
use std::path::PathBuf;

use crate::error::RecallResult;

/// Key-value persistence for a single integer high score.
pub trait ScoreStore {
    /// Read the stored high score, if any.
    fn load(&self) -> Option<u32>;

    /// Persist a new high score.
    fn save(&mut self, score: u32) -> RecallResult<()>;
}

/// In-memory store. Survives `play_again`, not process restarts.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a pre-existing high score.
    #[must_use]
    pub fn with_score(score: u32) -> Self {
        Self { value: Some(score) }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.value
    }

    fn save(&mut self, score: u32) -> RecallResult<()> {
        self.value = Some(score);
        Ok(())
    }
}

/// File-backed store holding the score as a decimal string, mirroring the
/// original's string-encoded localStorage slot.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Option<u32> {
        let contents = fs::read_to_string(&self.path).ok()?;
        contents.trim().parse().ok()
    }

    fn save(&mut self, score: u32) -> RecallResult<()> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}
