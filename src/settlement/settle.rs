//! Processing of a completed capture.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, Team, SELF_CAP_MULTIPLIER};
use crate::host::Host;
use crate::ledgers::CaptureLedger;
use crate::messages::{CaptureContext, MessageTemplates};

/// How a capture was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureKind {
    /// The capper returned their own team's flag. Always a penalty.
    SelfCapture,
    /// The cached bonus was positive: reward.
    Fair,
    /// The cached bonus was zero or negative: penalty.
    Unfair,
}

/// The settled result of one capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    /// The capping player.
    pub player: PlayerId,

    /// Classification of the capture.
    pub kind: CaptureKind,

    /// Signed score change applied to the capping player.
    pub points: i64,
}

impl CaptureOutcome {
    /// Whether this was a self-capture.
    #[must_use]
    pub fn is_self_capture(&self) -> bool {
        self.kind == CaptureKind::SelfCapture
    }

    /// Whether this capture was classified unfair.
    #[must_use]
    pub fn is_unfair(&self) -> bool {
        self.kind == CaptureKind::Unfair
    }
}

/// Settle a completed capture of `capped`'s flag by `player` of `capping`.
///
/// The capture time is recorded first and unconditionally, so the very
/// next grab-guard evaluation observes it regardless of classification.
/// Self-captures take a penalty of the self-cap multiplier times the
/// capped team's current size; otherwise the cached bonus recorded at the
/// last debounced grab decides both classification (by sign) and
/// magnitude. Exactly one win or loss call is made per capture, and each
/// non-empty template produces one message.
pub fn settle_capture(
    captures: &mut CaptureLedger,
    templates: &MessageTemplates,
    host: &mut dyn Host,
    player: PlayerId,
    capping: Team,
    capped: Team,
) -> CaptureOutcome {
    captures.record_capture(capped, host.now());

    let capper = host.player_name(player);

    if host.player_team(player) == capped {
        let penalty = SELF_CAP_MULTIPLIER * i64::from(host.team_size(capped));
        host.add_losses(player, penalty as u32);
        debug!(%player, penalty, "self-capture settled");

        let ctx = CaptureContext::new(capper, capping, capped, -penalty);
        send_public(host, &templates.self_capture_public, &ctx);
        send_private(host, player, &templates.self_capture_private, &ctx);

        return CaptureOutcome {
            player,
            kind: CaptureKind::SelfCapture,
            points: -penalty,
        };
    }

    let cached = captures.bonus(capped);
    let magnitude = cached.abs();

    if cached > 0 {
        host.add_wins(player, magnitude as u32);
        debug!(%player, points = magnitude, "fair capture settled");

        let ctx = CaptureContext::new(capper, capping, capped, magnitude);
        send_public(host, &templates.fair_capture_public, &ctx);
        send_private(host, player, &templates.fair_capture_private, &ctx);

        CaptureOutcome {
            player,
            kind: CaptureKind::Fair,
            points: magnitude,
        }
    } else {
        host.add_losses(player, magnitude as u32);
        debug!(%player, points = -magnitude, "unfair capture settled");

        let ctx = CaptureContext::new(capper, capping, capped, -magnitude);
        send_public(host, &templates.unfair_capture_public, &ctx);
        send_private(host, player, &templates.unfair_capture_private, &ctx);

        CaptureOutcome {
            player,
            kind: CaptureKind::Unfair,
            points: -magnitude,
        }
    }
}

fn send_public(host: &mut dyn Host, template: &str, ctx: &CaptureContext) {
    if !template.is_empty() {
        host.broadcast(&ctx.render(template));
    }
}

fn send_private(host: &mut dyn Host, player: PlayerId, template: &str, ctx: &CaptureContext) {
    if !template.is_empty() {
        host.send_private(player, &ctx.render(template));
    }
}
