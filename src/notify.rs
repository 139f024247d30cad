use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Pending transient notifications ("toasts"), oldest first.
pub struct Notifier {
    queue: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(Notification {
            level: NotificationLevel::Success,
            title: title.into(),
            description: None,
        });
    }

    pub fn error(&self, title: impl Into<String>) {
        self.push(Notification {
            level: NotificationLevel::Error,
            title: title.into(),
            description: None,
        });
    }

    pub fn destructive(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Notification {
            level: NotificationLevel::Error,
            title: title.into(),
            description: Some(description.into()),
        });
    }

    pub fn push(&self, notification: Notification) {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        while queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification);
    }

    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn oldest_notifications_are_dropped_past_capacity() {
        let notifier = Notifier::with_capacity(2);
        notifier.success("one");
        notifier.success("two");
        notifier.error("three");

        let titles: Vec<_> = notifier.drain().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert_eq!(notifier.pending(), 0);
    }

    #[test]
    fn destructive_carries_description() {
        let notifier = Notifier::new();
        notifier.destructive("Cannot delete account", "Stop the bot first");

        let note = notifier.drain().remove(0);
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.description.as_deref(), Some("Stop the bot first"));
    }
}
