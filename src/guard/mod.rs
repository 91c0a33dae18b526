//! Grab guard: decides whether a flag-grab attempt is permitted.

pub mod grab;

pub use grab::{evaluate_grab, GrabVerdict};
