//! Game events delivered by the host.
//!
//! The host delivers events strictly sequentially; each is handled to
//! completion before the next is accepted. Permission-check events carry
//! their answer as the explicit boolean returned by
//! [`crate::engine::Arbiter::dispatch`].

use serde::{Deserialize, Serialize};

use crate::core::{FlagId, PlayerId, Team};

/// One event from the host, in delivery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The host asks whether a pending capture may proceed.
    CapturePermission {
        player: PlayerId,
        capping: Team,
        capped: Team,
    },

    /// The host asks whether a player may grab a flag.
    GrabPermission {
        player: PlayerId,
        flag: FlagId,
        flag_team: Team,
    },

    /// A player picked up a flag.
    FlagGrabbed {
        player: PlayerId,
        flag: FlagId,
        flag_team: Team,
    },

    /// A player dropped a flag.
    FlagDropped {
        player: PlayerId,
        flag: FlagId,
        flag_team: Team,
    },

    /// A capture completed: `player` of `capping` returned `capped`'s flag.
    CaptureCompleted {
        player: PlayerId,
        capping: Team,
        capped: Team,
    },

    /// A player left the server. Evicts their throttle entry.
    PlayerParted { player: PlayerId },

    /// The host removed a flag instance. Evicts its drop entry.
    FlagRemoved { flag: FlagId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = GameEvent::CaptureCompleted {
            player: PlayerId::new(3),
            capping: Team::Red,
            capped: Team::Blue,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
