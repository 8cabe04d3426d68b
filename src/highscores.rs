//! High score ledger
//!
//! Top 5 scores, highest first, stored as a plain JSON array.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// High score ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<u64>,
}

impl HighScores {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highScore";

    /// Create empty ledger
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a ledger from arbitrary stored values, restoring the ordering
    pub fn from_entries(mut entries: Vec<u64>) -> Self {
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    /// Check if a score would enter the ledger.
    ///
    /// While the ledger has room every score enters; once full a score must
    /// beat an existing entry outright, so tying the lowest is not enough.
    pub fn qualifies(&self, score: u64) -> bool {
        self.entries.len() < MAX_HIGH_SCORES || self.entries.iter().any(|&e| e < score)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        Some(self.entries.iter().filter(|&&e| e >= score).count() + 1)
    }

    /// Add a new score to the ledger (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }

    /// Load the ledger from a store
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let scores = Self::from_entries(persistence::load_json::<Vec<u64>, _>(
            store,
            Self::STORAGE_KEY,
        ));
        log::info!("Loaded {} high scores", scores.entries.len());
        scores
    }

    /// Save the ledger to a store
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        if persistence::save_json(store, Self::STORAGE_KEY, self) {
            log::info!("High scores saved ({} entries)", self.entries.len());
        }
    }
}
