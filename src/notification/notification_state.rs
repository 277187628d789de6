//! Notification state management
//!
//! Transient messages shown on top of whichever screen is active.

use std::time::{Duration, Instant};

use crate::theme;
use crate::theme::notification::NotificationColors;

/// Notification type - determines colors and how long it stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Confirmations like "Quiz restarted"
    #[default]
    Info,
    /// Problems the user should notice, e.g. an unreadable config file
    Warning,
}

impl NotificationType {
    pub fn ttl(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationType,
    pub shown_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
            ttl: kind.ttl(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.ttl
    }
}

/// At most one notification is visible; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Warning));
    }

    /// Drop the notification once its time is up; true if one was dropped
    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
