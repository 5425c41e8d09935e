#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::consts::{TOAST_TTL_MS, TOOLTIP_TTL_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
        }
    }
}

/// A toast shown in the corner stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// Auto-dismiss delay.
    pub ttl_ms: u32,
}

/// Toast stack, newest last.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Queue a toast and return its id so the caller can schedule removal.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> String {
        self.push_with_ttl(kind, message, TOAST_TTL_MS)
    }

    /// Stat detail tooltip: an info toast with a shorter life.
    pub fn push_tooltip(&mut self, message: impl Into<String>) -> String {
        self.push_with_ttl(NotificationKind::Info, message, TOOLTIP_TTL_MS)
    }

    fn push_with_ttl(&mut self, kind: NotificationKind, message: impl Into<String>, ttl_ms: u32) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notification { id: id.clone(), kind, message: message.into(), ttl_ms });
        id
    }

    /// Remove a toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }
}
