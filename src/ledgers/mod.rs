//! Engine-owned state ledgers.
//!
//! Three small per-key tables, all with default-on-miss semantics: a team
//! that was never captured against, a flag that was never dropped, and a
//! player who was never warned are well-defined states, never errors.
//! The ledgers are exclusively owned and mutated by the engine; nothing
//! external writes to them.

pub mod capture;
pub mod drops;
pub mod warnings;

pub use capture::{CaptureEntry, CaptureLedger};
pub use drops::DropLedger;
pub use warnings::WarningThrottle;
