//! Debounced bonus recalculation, triggered on enemy flag grabs.

use tracing::debug;

use crate::core::{FlagId, PlayerId, Team, RECALC_INTERVAL_SECS};
use crate::host::Host;
use crate::ledgers::{CaptureLedger, DropLedger};

use super::bonus::capture_bonus;

/// Recalculate the cached capture bonus for `flag_team` after `player`
/// grabbed its flag, unless the flag was dropped by an enemy less than
/// [`RECALC_INTERVAL_SECS`] ago. A flag that was never dropped is always
/// eligible, so a fresh server start gets a first calculation.
///
/// On recalculation, if the host's warn-on-unfair option is set, the new
/// bonus is negative, and the defending team is non-empty, the grabbing
/// player receives a one-line sportsmanship warning.
pub fn refresh_bonus(
    captures: &mut CaptureLedger,
    drops: &DropLedger,
    host: &mut dyn Host,
    player: PlayerId,
    flag: FlagId,
    flag_team: Team,
) {
    let grab_team = host.player_team(player);

    if !grab_team.is_playable() || !flag_team.is_playable() || grab_team == flag_team {
        return;
    }

    let now = host.now();
    let eligible = match drops.last_drop(flag) {
        None => true,
        Some(dropped) => now.seconds_since(dropped) >= RECALC_INTERVAL_SECS,
    };

    // The stale value is kept deliberately: recalculating here would let a
    // defender reset the bonus by dropping their flag right before a capture.
    if !eligible {
        return;
    }

    let flag_team_size = host.team_size(flag_team);
    let grab_team_size = host.team_size(grab_team);
    let bonus = capture_bonus(grab_team_size, flag_team_size);

    captures.set_bonus(flag_team, bonus);
    debug!(
        team = flag_team.name(),
        grab_team_size, flag_team_size, bonus, "recalculated capture bonus"
    );

    if host.warn_unfair_grabs() && bonus < 0 && flag_team_size > 0 {
        host.send_private(
            player,
            &format!("{grab_team_size} vs {flag_team_size}? Don't be a bad sport."),
        );
    }
}
