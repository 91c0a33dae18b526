//! Capture fairness: the bonus formula and its debounced application.
//!
//! `bonus` holds the pure team-size-asymmetry formula, callable standalone
//! for diagnostics. `refresh` applies it on enemy flag grabs, debounced
//! against the drop ledger so a defender cannot cheaply reset the
//! calculation by dropping and re-grabbing their own flag.

pub mod bonus;
pub mod refresh;

pub use bonus::{capture_bonus, is_fair_capture};
pub use refresh::refresh_bonus;
