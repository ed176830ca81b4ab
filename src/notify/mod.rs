//! Notification Module
//!
//! Ephemeral messages appended to the page. Each notification auto-dismisses
//! after a fixed TTL or when clicked. The center is swept from the host's
//! timer; it never owns a timer of its own.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use uuid::Uuid;

use crate::consts::NOTIFICATION_TTL_MS;

/// Visual flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// One ephemeral message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

/// Holds the currently visible notifications
#[derive(Debug)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::milliseconds(NOTIFICATION_TTL_MS as i64))
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    /// Append a notification; returns its id for later dismissal
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        };
        debug!("notification ({kind:?}): {}", notification.message);
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Click-to-dismiss; true when the id was present
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop notifications older than the TTL
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.items.retain(|n| now - n.created_at < ttl);
    }

    pub fn visible(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut center = NotificationCenter::default();
        let id = center.push("User deleted successfully", NotificationKind::Success);
        assert_eq!(center.visible().len(), 1);

        assert!(center.dismiss(id));
        assert!(center.is_empty());
        assert!(!center.dismiss(id));
    }

    #[test]
    fn test_sweep_expires_old_notifications() {
        let mut center = NotificationCenter::new(Duration::milliseconds(5000));
        center.push("stale", NotificationKind::Info);
        let now = Utc::now();

        center.sweep(now + Duration::milliseconds(4000));
        assert_eq!(center.visible().len(), 1);

        center.sweep(now + Duration::milliseconds(10_000));
        assert!(center.is_empty());
    }

    #[test]
    fn test_sweep_keeps_fresh_notifications() {
        let mut center = NotificationCenter::default();
        center.push("first", NotificationKind::Info);
        center.push("second", NotificationKind::Error);

        center.sweep(Utc::now());
        assert_eq!(center.visible().len(), 2);
    }
}
