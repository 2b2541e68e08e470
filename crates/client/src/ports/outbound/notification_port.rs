//! Notification Port - user-facing toasts
//!
//! Rendering is someone else's job. The client only decides what to say and
//! how loud.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}
