use std::sync::{Arc, Mutex};

use crate::models::Notification;

/// NotificationSink
///
/// Contract for the external presentation queue that surfaces user-facing
/// messages (toasts). Fire-and-forget: no acknowledgment flows back, and the
/// effectful access guard publishes at most one message per decision.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: Notification);
}

/// RecordingSink
///
/// An in-memory sink that retains every published notification, used in tests
/// to assert exactly which messages a guard decision emitted. Doubles as a
/// reasonable default when no presenter is wired up yet.
#[derive(Clone, Default)]
pub struct RecordingSink {
    published: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// published
    ///
    /// Snapshot of everything published so far, in order.
    pub fn published(&self) -> Vec<Notification> {
        self.published.lock().expect("sink lock poisoned").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn publish(&self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "notification published");
        self.published
            .lock()
            .expect("sink lock poisoned")
            .push(notification);
    }
}

/// NotifierState
///
/// The concrete type used to share the notification sink across the router
/// state.
pub type NotifierState = Arc<dyn NotificationSink>;
