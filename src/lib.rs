//! # ctf-arbiter
//!
//! A rule engine for a team capture-the-flag game mode: it decides whether
//! flag grabs and captures are allowed, classifies each capture as self,
//! fair, or unfair, computes the point award or penalty, and throttles the
//! warnings sent to players attempting disallowed actions.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The game server is reached only through the
//!    [`host::Host`] trait. The engine returns decisions and message text;
//!    delivery and scoring calls go back through the host.
//!
//! 2. **Run-To-Completion**: Events arrive strictly sequentially and each
//!    handler finishes before the next event is accepted. The engine holds
//!    no timers; every window is a comparison against the host's monotonic
//!    clock.
//!
//! 3. **Default-On-Miss**: Ledger lookups for never-seen keys are
//!    well-defined states, never errors. Nothing inside the engine can
//!    abort event processing.
//!
//! ## Modules
//!
//! - `core`: Player/flag IDs, teams, the game clock, engine constants
//! - `fairness`: The capture bonus formula and its debounced refresh
//! - `ledgers`: Capture, drop, and warning state tables
//! - `guard`: Grab-permission decisions with throttled warnings
//! - `settlement`: Capture classification, scoring, message delivery
//! - `messages`: Operator-configured templates and placeholder rendering
//! - `events`: The closed union of host events
//! - `host`: The capability trait the embedder implements
//! - `listeners`: Capture notifications for external plugins
//! - `engine`: The [`engine::Arbiter`], owning all state and routing events

pub mod core;
pub mod engine;
pub mod events;
pub mod fairness;
pub mod guard;
pub mod host;
pub mod ledgers;
pub mod listeners;
pub mod messages;
pub mod settlement;

// Re-export commonly used types
pub use crate::core::{
    FlagId, GameTime, PlayerId, Team, TeamMap,
    RECALC_INTERVAL_SECS, SELF_CAP_MULTIPLIER, WARN_INTERVAL_SECS,
};

pub use crate::engine::Arbiter;

pub use crate::events::GameEvent;

pub use crate::fairness::{capture_bonus, is_fair_capture, refresh_bonus};

pub use crate::guard::{evaluate_grab, GrabVerdict};

pub use crate::host::Host;

pub use crate::ledgers::{CaptureEntry, CaptureLedger, DropLedger, WarningThrottle};

pub use crate::listeners::{CaptureListener, CaptureNotice, ListenerId, ListenerRegistry};

pub use crate::messages::{CaptureContext, MessageTemplates, TemplateError};

pub use crate::settlement::{settle_capture, CaptureKind, CaptureOutcome};
