//! The host capability boundary.
//!
//! The engine never talks to the game server directly. The clock, roster
//! queries, score mutation, message delivery, and the tunable parameters
//! all come through the [`Host`] trait: embedders implement it over their
//! server API, tests over recorded vectors.

use crate::core::{GameTime, PlayerId, Team};

/// Capabilities the engine consumes from the game host.
///
/// Tunables are read on each relevant decision rather than cached, so a
/// server operator can change them mid-game and the very next event sees
/// the new value.
pub trait Host {
    // === Queries ===

    /// Current monotonic game-clock time.
    fn now(&self) -> GameTime;

    /// Current player count on `team`.
    fn team_size(&self, team: Team) -> u32;

    /// The team `player` is currently on.
    fn player_team(&self, player: PlayerId) -> Team;

    /// Display name for `player`, used in capture messages.
    fn player_name(&self, player: PlayerId) -> String;

    // === Mutations ===

    /// Increment `player`'s win counter by `points`.
    fn add_wins(&mut self, player: PlayerId, points: u32);

    /// Increment `player`'s loss counter by `points`.
    fn add_losses(&mut self, player: PlayerId, points: u32);

    /// Send a text line to one player.
    fn send_private(&mut self, player: PlayerId, line: &str);

    /// Send a text line to all players.
    fn broadcast(&mut self, line: &str);

    // === Tunables ===

    /// Cooldown in seconds after a capture during which the capped team's
    /// flag cannot be grabbed by non-owning players. Negative disables the
    /// guard entirely.
    fn grab_delay_secs(&self) -> i64 {
        20
    }

    /// Whether self-captures are disallowed outright at the permission
    /// check.
    fn self_capture_disallowed(&self) -> bool {
        true
    }

    /// Whether grabbing an outnumbered team's flag sends the grabber a
    /// sportsmanship warning.
    fn warn_unfair_grabs(&self) -> bool {
        true
    }
}
