//! Team identifiers and per-team storage.
//!
//! ## Team
//!
//! Teams are constants of the game mode, never created or destroyed. The
//! four playable teams own flags and are subject to capture rules; rogue
//! and observer slots are exempt from everything in this crate.
//!
//! ## TeamMap
//!
//! Per-playable-team data storage backed by a fixed four-slot array.
//! Lookups for non-playable teams return `None` rather than erroring, so
//! callers can treat foreign teams as "not applicable".

use serde::{Deserialize, Serialize};

/// Team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Green,
    Blue,
    Purple,
    /// Unaffiliated player slot; holds no flag.
    Rogue,
    /// Non-playing spectator slot.
    Observer,
}

impl Team {
    /// The four teams that own flags and are subject to capture rules.
    pub const PLAYABLE: [Team; 4] = [Team::Red, Team::Green, Team::Blue, Team::Purple];

    /// Whether this team owns a flag and participates in capture scoring.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, Team::Red | Team::Green | Team::Blue | Team::Purple)
    }

    /// Iterate over the playable teams.
    pub fn playable() -> impl Iterator<Item = Team> {
        Self::PLAYABLE.into_iter()
    }

    /// Human-readable team name, as shown in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Team::Red => "Red",
            Team::Green => "Green",
            Team::Blue => "Blue",
            Team::Purple => "Purple",
            Team::Rogue => "Rogue",
            Team::Observer => "Observer",
        }
    }

    /// Slot index into a [`TeamMap`]; `None` for non-playable teams.
    const fn slot(self) -> Option<usize> {
        match self {
            Team::Red => Some(0),
            Team::Green => Some(1),
            Team::Blue => Some(2),
            Team::Purple => Some(3),
            Team::Rogue | Team::Observer => None,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-playable-team data storage with O(1) access.
///
/// Backed by a fixed `[T; 4]`, one slot per playable team. Non-playable
/// teams have no slot; `get`/`get_mut` return `None` for them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMap<T> {
    slots: [T; 4],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            slots: [
                factory(Team::Red),
                factory(Team::Green),
                factory(Team::Blue),
                factory(Team::Purple),
            ],
        }
    }

    /// Get a reference to a team's data; `None` for non-playable teams.
    #[must_use]
    pub fn get(&self, team: Team) -> Option<&T> {
        team.slot().map(|i| &self.slots[i])
    }

    /// Get a mutable reference to a team's data; `None` for non-playable teams.
    pub fn get_mut(&mut self, team: Team) -> Option<&mut T> {
        team.slot().map(|i| &mut self.slots[i])
    }

    /// Iterate over (Team, &T) pairs for the playable teams.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::PLAYABLE.into_iter().zip(self.slots.iter())
    }
}
