//! Core types: identifiers, teams, the game clock, and engine constants.
//!
//! Everything here is a plain value type. The host assigns player and flag
//! identifiers, teams are constants of the game mode, and all timestamps
//! flow from the host's single monotonic clock.

pub mod clock;
pub mod ids;
pub mod team;

pub use clock::GameTime;
pub use ids::{FlagId, PlayerId};
pub use team::{Team, TeamMap};

/// Seconds that must pass after an enemy flag drop before the capture
/// bonus may be recalculated on a subsequent grab.
pub const RECALC_INTERVAL_SECS: f64 = 20.0;

/// Penalty multiplier for self-captures; applied to the capped team's
/// current size.
pub const SELF_CAP_MULTIPLIER: i64 = 5;

/// Minimum seconds between repeated grab warnings to the same player.
pub const WARN_INTERVAL_SECS: f64 = 5.0;
