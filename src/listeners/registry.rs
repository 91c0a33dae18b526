//! Listener registry for capture notices.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Unique identifier for a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// What listeners learn about each capture decision.
///
/// Richer than the raw host capture event: it also reports self-capture,
/// unfairness, and whether the engine disallowed the capture outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureNotice {
    /// The player who triggered the capture.
    pub player: PlayerId,

    /// Whether the capture was classified unfair.
    pub was_unfair: bool,

    /// Whether the engine denied the capture at the permission check.
    pub was_disallowed: bool,

    /// Whether the capture was a self-capture.
    pub was_self_cap: bool,
}

/// A capture notification subscriber.
///
/// Blanket-implemented for closures, so
/// `registry.register(Box::new(|notice| ...))` works directly.
pub trait CaptureListener {
    /// Called once per capture decision.
    fn on_capture(&mut self, notice: &CaptureNotice);
}

impl<F: FnMut(&CaptureNotice)> CaptureListener for F {
    fn on_capture(&mut self, notice: &CaptureNotice) {
        self(notice)
    }
}

/// Registry of capture listeners with register/unregister by ID.
///
/// Listeners are notified in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Box<dyn CaptureListener>)>,
    next_id: u32,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returns its ID.
    pub fn register(&mut self, listener: Box<dyn CaptureListener>) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener. Returns whether it was present.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Notify every registered listener.
    pub fn notify(&mut self, notice: &CaptureNotice) {
        for (_, listener) in &mut self.listeners {
            listener.on_capture(notice);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
