//! Grab permission evaluation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Team, WARN_INTERVAL_SECS};
use crate::host::Host;
use crate::ledgers::{CaptureLedger, WarningThrottle};

/// Outcome of a grab-permission check.
///
/// `warnings` holds zero or two lines for delivery to the acting player
/// only, never broadcast. Two lines accompany a denial unless the player
/// was warned within the anti-spam interval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrabVerdict {
    /// Whether the grab may proceed.
    pub allow: bool,

    /// Warning lines for the acting player.
    pub warnings: SmallVec<[String; 2]>,
}

impl GrabVerdict {
    fn allowed() -> Self {
        Self {
            allow: true,
            warnings: SmallVec::new(),
        }
    }
}

/// Decide whether `player` may grab `flag_team`'s flag.
///
/// Grabs are blocked only inside the configured re-grab delay after a
/// capture against `flag_team`, and only for players not on that team:
/// defenders may always pick up their own flag. Non-team flags, teams
/// never captured against, and a negative configured delay all allow
/// unconditionally.
pub fn evaluate_grab(
    captures: &CaptureLedger,
    throttle: &mut WarningThrottle,
    host: &dyn Host,
    player: PlayerId,
    flag_team: Team,
) -> GrabVerdict {
    // Regular (non-team) flags are never restricted.
    if !flag_team.is_playable() {
        return GrabVerdict::allowed();
    }

    let Some(last_capture) = captures.last_capture(flag_team) else {
        return GrabVerdict::allowed();
    };

    let delay = host.grab_delay_secs();
    if delay < 0 {
        return GrabVerdict::allowed();
    }

    let now = host.now();
    let safe_at = last_capture.offset(delay as f64);
    if now >= safe_at {
        return GrabVerdict::allowed();
    }

    // Defenders may always pick up their own flag.
    if host.player_team(player) == flag_team {
        return GrabVerdict::allowed();
    }

    let mut warnings = SmallVec::new();
    if throttle.may_warn(player, now, WARN_INTERVAL_SECS) {
        warnings.push(format!(
            "Team flags cannot be grabbed for {delay} seconds after they were last capped."
        ));
        warnings.push(format!(
            "You cannot grab the {} team flag for another ~{:.0} seconds",
            flag_team.name(),
            safe_at.seconds_since(now)
        ));
        throttle.record(player, now);
    }

    GrabVerdict {
        allow: false,
        warnings,
    }
}
