//! The capture bonus formula.
//!
//! Deliberately asymmetric: capturing a numerically superior defending
//! team is rewarded, capturing a weaker one is penalized, scaled by the
//! size gap. No clamping; results can be negative, zero, or large.

/// Point value for capturing `capped_size` defenders with a team of
/// `capping_size` attackers.
///
/// `3 * capped + 8 * (capped - capping)`. Positive means a fair capture
/// (reward); zero or negative means unfair (penalty).
#[must_use]
pub fn capture_bonus(capping_size: u32, capped_size: u32) -> i64 {
    let capping = i64::from(capping_size);
    let capped = i64::from(capped_size);

    3 * capped + 8 * (capped - capping)
}

/// Whether a capture with these team sizes counts as fair.
#[must_use]
pub fn is_fair_capture(capping_size: u32, capped_size: u32) -> bool {
    capture_bonus(capping_size, capped_size) > 0
}
