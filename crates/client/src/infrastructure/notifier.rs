//! Notification adapter that writes toasts to the log.

use crate::ports::outbound::{NotificationLevel, NotificationPort};

/// Routes notifications to `tracing` at a level matching their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Success => tracing::info!(target: "stockwatch::notify", "{message}"),
            NotificationLevel::Warning => tracing::warn!(target: "stockwatch::notify", "{message}"),
            NotificationLevel::Error => tracing::error!(target: "stockwatch::notify", "{message}"),
        }
    }
}
