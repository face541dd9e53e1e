//! Transient user-facing notifications

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Error)
    }

    fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let n = Notification::success("ok");
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_old_notification_expires() {
        let mut n = Notification::error("fail");
        n.shown_at = Instant::now() - NOTIFICATION_TTL - Duration::from_millis(1);
        assert!(n.is_expired());
    }
}
