//! The monotonic game clock.
//!
//! The engine never reads wall-clock time. Every timestamp is supplied by
//! the host through [`crate::host::Host::now`], and the debounce/delay
//! windows are pure comparisons against those values.

use serde::{Deserialize, Serialize};

/// A timestamp on the host's monotonic game clock, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GameTime(f64);

impl GameTime {
    /// Create a timestamp from seconds since the clock epoch.
    #[must_use]
    pub const fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    /// Seconds since the clock epoch.
    #[must_use]
    pub const fn as_secs(self) -> f64 {
        self.0
    }

    /// This timestamp shifted forward by `secs` (negative shifts back).
    #[must_use]
    pub fn offset(self, secs: f64) -> Self {
        Self(self.0 + secs)
    }

    /// Seconds elapsed between `earlier` and this timestamp.
    #[must_use]
    pub fn seconds_since(self, earlier: GameTime) -> f64 {
        self.0 - earlier.0
    }
}
