//! The arbiter owns all engine state and routes host events to the rule
//! components.

use tracing::error;

use crate::core::{FlagId, PlayerId, Team};
use crate::events::GameEvent;
use crate::fairness::refresh_bonus;
use crate::guard::evaluate_grab;
use crate::host::Host;
use crate::ledgers::{CaptureLedger, DropLedger, WarningThrottle};
use crate::listeners::{CaptureListener, CaptureNotice, ListenerId, ListenerRegistry};
use crate::messages::{MessageTemplates, TemplateError};
use crate::settlement::{settle_capture, CaptureKind, CaptureOutcome};

/// The rule engine for the capture-the-flag game mode.
///
/// Owns the three ledgers, the message templates, and the listener
/// registry. Events must be dispatched one at a time, in the order the
/// host delivers them; every handler runs to completion, so a capture's
/// ledger write is visible to the very next grab-guard evaluation. A
/// concurrent host must funnel dispatch through a single owning task.
#[derive(Debug, Default)]
pub struct Arbiter {
    captures: CaptureLedger,
    drops: DropLedger,
    warnings: WarningThrottle,
    templates: MessageTemplates,
    listeners: ListenerRegistry,
}

impl Arbiter {
    /// Create an arbiter with empty ledgers and empty (suppressed)
    /// message templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arbiter with the given message templates.
    #[must_use]
    pub fn with_templates(templates: MessageTemplates) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    // === Event routing ===

    /// Route one host event to its handler.
    ///
    /// Returns the answer for permission-check events; every other event
    /// returns `true` (the host's `allow` field is left untouched).
    pub fn dispatch(&mut self, host: &mut dyn Host, event: &GameEvent) -> bool {
        match *event {
            GameEvent::CapturePermission { player, capped, .. } => {
                self.on_capture_permission(host, player, capped)
            }
            GameEvent::GrabPermission {
                player, flag_team, ..
            } => self.on_grab_permission(host, player, flag_team),
            GameEvent::FlagGrabbed {
                player,
                flag,
                flag_team,
            } => {
                self.on_flag_grabbed(host, player, flag, flag_team);
                true
            }
            GameEvent::FlagDropped {
                player,
                flag,
                flag_team,
            } => {
                self.on_flag_dropped(host, player, flag, flag_team);
                true
            }
            GameEvent::CaptureCompleted {
                player,
                capping,
                capped,
            } => {
                self.on_capture_completed(host, player, capping, capped);
                true
            }
            GameEvent::PlayerParted { player } => {
                self.on_player_parted(player);
                true
            }
            GameEvent::FlagRemoved { flag } => {
                self.on_flag_removed(flag);
                true
            }
        }
    }

    // === Handlers ===

    /// Answer the host's capture-permission check.
    ///
    /// A self-capture is denied when the host's disallow option is set;
    /// listeners hear about the denial since settlement never runs for it.
    pub fn on_capture_permission(
        &mut self,
        host: &mut dyn Host,
        player: PlayerId,
        capped: Team,
    ) -> bool {
        if host.player_team(player) == capped && host.self_capture_disallowed() {
            self.listeners.notify(&CaptureNotice {
                player,
                was_unfair: false,
                was_disallowed: true,
                was_self_cap: true,
            });
            return false;
        }
        true
    }

    /// Answer the host's grab-permission check, delivering any throttled
    /// warning lines to the acting player.
    pub fn on_grab_permission(
        &mut self,
        host: &mut dyn Host,
        player: PlayerId,
        flag_team: Team,
    ) -> bool {
        let verdict = evaluate_grab(&self.captures, &mut self.warnings, host, player, flag_team);
        for line in &verdict.warnings {
            host.send_private(player, line);
        }
        verdict.allow
    }

    /// Handle a completed grab: refresh the capped-team bonus, debounced
    /// against recent enemy drops.
    pub fn on_flag_grabbed(
        &mut self,
        host: &mut dyn Host,
        player: PlayerId,
        flag: FlagId,
        flag_team: Team,
    ) {
        refresh_bonus(&mut self.captures, &self.drops, host, player, flag, flag_team);
    }

    /// Handle a flag drop. Only enemy drops of playable team flags reset
    /// the recalculation debounce window.
    pub fn on_flag_dropped(
        &mut self,
        host: &mut dyn Host,
        player: PlayerId,
        flag: FlagId,
        flag_team: Team,
    ) {
        if flag_team.is_playable() && host.player_team(player) != flag_team {
            self.drops.record(flag, host.now());
        }
    }

    /// Settle a completed capture and notify listeners.
    ///
    /// Returns `None` for captures of non-team flags, which are outside
    /// the rules entirely.
    pub fn on_capture_completed(
        &mut self,
        host: &mut dyn Host,
        player: PlayerId,
        capping: Team,
        capped: Team,
    ) -> Option<CaptureOutcome> {
        if !capped.is_playable() {
            return None;
        }

        let outcome = settle_capture(
            &mut self.captures,
            &self.templates,
            host,
            player,
            capping,
            capped,
        );

        self.listeners.notify(&CaptureNotice {
            player,
            was_unfair: outcome.kind == CaptureKind::Unfair,
            was_disallowed: false,
            was_self_cap: outcome.kind == CaptureKind::SelfCapture,
        });

        Some(outcome)
    }

    /// Evict a disconnected player's warning-throttle entry.
    pub fn on_player_parted(&mut self, player: PlayerId) {
        self.warnings.forget(player);
    }

    /// Evict a removed flag's drop-ledger entry.
    pub fn on_flag_removed(&mut self, flag: FlagId) {
        self.drops.forget(flag);
    }

    // === Configuration ===

    /// Replace the message templates from key/value configuration text.
    ///
    /// On failure the previous templates stay in effect and the error is
    /// reported once on the diagnostic channel.
    pub fn reload_templates(&mut self, source: &str) -> Result<(), TemplateError> {
        match MessageTemplates::from_toml(source) {
            Ok(templates) => {
                self.templates = templates;
                Ok(())
            }
            Err(err) => {
                error!(%err, "failed to reload capture message templates; keeping previous set");
                Err(err)
            }
        }
    }

    // === Listeners ===

    /// Register a capture listener, returns its ID.
    pub fn register_listener(&mut self, listener: Box<dyn CaptureListener>) -> ListenerId {
        self.listeners.register(listener)
    }

    /// Unregister a capture listener. Returns whether it was present.
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    // === Accessors ===

    /// The per-team capture ledger.
    #[must_use]
    pub fn captures(&self) -> &CaptureLedger {
        &self.captures
    }

    /// The per-flag drop ledger.
    #[must_use]
    pub fn drops(&self) -> &DropLedger {
        &self.drops
    }

    /// The per-player warning throttle.
    #[must_use]
    pub fn warnings(&self) -> &WarningThrottle {
        &self.warnings
    }

    /// The currently loaded message templates.
    #[must_use]
    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }
}
