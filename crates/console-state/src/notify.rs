//! User-facing notifications
//!
//! Resource stores report failures through an injected [`Notifier`] rather
//! than a process-wide toast singleton, so their fetch logic can be exercised
//! without a UI.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// Informational
    Info,

    /// Something the user may want to look at
    Warning,

    /// An operation failed
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: NotificationLevel,

    /// Message text
    pub message: String,
}

impl Notification {
    /// Create an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// Create a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Notification capability.
pub trait Notifier: Send + Sync {
    /// Show a notification to the user.
    fn notify(&self, notification: Notification);
}

/// Notifier that writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => info!(target: "console::notify", "{}", notification.message),
            NotificationLevel::Warning => warn!(target: "console::notify", "{}", notification.message),
            NotificationLevel::Error => error!(target: "console::notify", "{}", notification.message),
        }
    }
}

/// Notifier that records every notification in memory.
///
/// Useful for tests and for UIs that drain notifications on their own tick.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // A poisoned list is still a valid list.
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Notifications recorded so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Remove and return all recorded notifications.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notification::info("first"));
        notifier.notify(Notification::error("second"));

        let recorded = notifier.notifications();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].message, "first");
        assert_eq!(recorded[1].level, NotificationLevel::Error);
    }

    #[test]
    fn test_drain_empties_notifier() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notification::error("boom"));

        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_tracing_notifier_does_not_panic() {
        TracingNotifier.notify(Notification::error("logged only"));
    }
}
