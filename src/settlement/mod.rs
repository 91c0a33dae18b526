//! Capture settlement: classification, scoring, and message delivery.

pub mod settle;

pub use settle::{settle_capture, CaptureKind, CaptureOutcome};
