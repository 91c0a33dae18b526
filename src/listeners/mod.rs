//! Capture notifications for external listeners.
//!
//! A stable extension point: other plugins register to hear about every
//! capture decision, including ones the engine disallowed.

pub mod registry;

pub use registry::{CaptureListener, CaptureNotice, ListenerId, ListenerRegistry};
