//! Per-team capture ledger.

use serde::{Deserialize, Serialize};

use crate::core::{GameTime, Team, TeamMap};

/// Capture state for one playable team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureEntry {
    /// When this team's flag was last captured; `None` means never.
    pub last_capture: Option<GameTime>,

    /// Last computed capture-point value for this team's flag, as of the
    /// most recent debounced grab against it. Read, not recomputed, at
    /// capture time.
    pub bonus: i64,
}

/// Records the last capture time and current capture bonus per team.
///
/// Entries live for the lifetime of the engine. `last_capture` is written
/// only by capture settlement; `bonus` only by the debounced
/// recalculation on flag grabs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureLedger {
    entries: TeamMap<CaptureEntry>,
}

impl CaptureLedger {
    /// Create an empty ledger: no team has been captured against.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `team`'s flag was captured at `at`.
    ///
    /// No-op for non-playable teams.
    pub fn record_capture(&mut self, team: Team, at: GameTime) {
        if let Some(entry) = self.entries.get_mut(team) {
            entry.last_capture = Some(at);
        }
    }

    /// When `team` was last captured against; `None` if never, or if the
    /// team is not playable.
    #[must_use]
    pub fn last_capture(&self, team: Team) -> Option<GameTime> {
        self.entries.get(team).and_then(|e| e.last_capture)
    }

    /// Overwrite the cached capture bonus for `team`.
    ///
    /// No-op for non-playable teams.
    pub fn set_bonus(&mut self, team: Team, bonus: i64) {
        if let Some(entry) = self.entries.get_mut(team) {
            entry.bonus = bonus;
        }
    }

    /// The cached capture bonus for `team`; 0 if never calculated, or if
    /// the team is not playable.
    #[must_use]
    pub fn bonus(&self, team: Team) -> i64 {
        self.entries.get(team).map_or(0, |e| e.bonus)
    }
}
