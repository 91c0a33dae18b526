//! Per-flag drop ledger.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{FlagId, GameTime};

/// Records the last enemy drop time per flag instance.
///
/// Used to debounce bonus recalculation: a flag dropped by an enemy moments
/// ago keeps its previous bonus. Drops by the flag's own team are never
/// recorded (the caller filters them), so carrying one's own flag does not
/// reset the window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DropLedger {
    last_drop: FxHashMap<FlagId, GameTime>,
}

impl DropLedger {
    /// Create an empty ledger: every flag counts as never dropped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an enemy drop of `flag` at `at`.
    pub fn record(&mut self, flag: FlagId, at: GameTime) {
        self.last_drop.insert(flag, at);
    }

    /// When `flag` was last dropped by an enemy; `None` if never.
    #[must_use]
    pub fn last_drop(&self, flag: FlagId) -> Option<GameTime> {
        self.last_drop.get(&flag).copied()
    }

    /// Drop the entry for a flag the host has removed.
    pub fn forget(&mut self, flag: FlagId) {
        self.last_drop.remove(&flag);
    }

    /// Number of flags with a recorded drop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last_drop.len()
    }

    /// Check if no drops have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_drop.is_empty()
    }
}
