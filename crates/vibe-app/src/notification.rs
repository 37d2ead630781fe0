//! Transient toast notifications

use std::collections::VecDeque;

/// Ticks a toast stays on screen (the loop ticks every 50ms)
pub const NOTIFICATION_TICKS: u32 = 80;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
    /// Remaining ticks before the toast is dropped
    pub ttl: u32,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
            ttl: NOTIFICATION_TICKS,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, body)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, body)
    }
}

/// Newest-last queue of toasts, capped at a few entries
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: VecDeque<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        if self.items.len() == MAX_VISIBLE {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for item in self.items.iter_mut() {
            item.ttl = item.ttl.saturating_sub(1);
        }
        self.items.retain(|n| n.ttl > 0);
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_expires_notifications() {
        let mut queue = Notifications::default();
        let mut short = Notification::info("a", "b");
        short.ttl = 1;
        queue.push(short);
        queue.push(Notification::info("c", "d"));

        queue.tick();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.latest().map(|n| n.title.as_str()), Some("c"));
    }

    #[test]
    fn test_queue_is_capped() {
        let mut queue = Notifications::default();
        for i in 0..5 {
            queue.push(Notification::info(format!("n{i}"), ""));
        }
        assert_eq!(queue.len(), MAX_VISIBLE);
        assert_eq!(queue.iter().next().map(|n| n.title.as_str()), Some("n2"));
    }
}
