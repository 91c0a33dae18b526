//! Per-player warning throttle.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameTime, PlayerId};

/// Records when each player was last warned about a blocked grab, so
/// repeated attempts inside the anti-spam interval stay silent.
///
/// Entries are evicted when the player disconnects; otherwise the table
/// would grow without bound over the life of the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WarningThrottle {
    last_warned: FxHashMap<PlayerId, GameTime>,
}

impl WarningThrottle {
    /// Create an empty throttle: every player is warning-eligible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a warning may be sent to `player` at `now`.
    ///
    /// True if the player was never warned, or the last warning is more
    /// than `interval_secs` old.
    #[must_use]
    pub fn may_warn(&self, player: PlayerId, now: GameTime, interval_secs: f64) -> bool {
        match self.last_warned.get(&player) {
            None => true,
            Some(&at) => now.seconds_since(at) > interval_secs,
        }
    }

    /// Record that `player` was warned at `now`.
    pub fn record(&mut self, player: PlayerId, now: GameTime) {
        self.last_warned.insert(player, now);
    }

    /// Drop the entry for a disconnected player.
    pub fn forget(&mut self, player: PlayerId) {
        self.last_warned.remove(&player);
    }

    /// Number of players with a recorded warning.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last_warned.len()
    }

    /// Check if no warnings have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_warned.is_empty()
    }
}
