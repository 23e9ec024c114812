//! NotificationState - User Notifications with Ring Buffer

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use crate::components::table::{ErrorReporter, Severity};
use crate::constants::NOTIFICATION_CAPACITY;

/// A single notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Notifications kept in a ring buffer
#[derive(Debug)]
pub struct NotificationState {
    entries: VecDeque<Notification>,
    capacity: usize,
    next_id: u64,
}

impl NotificationState {
    /// Create a new state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
        }
    }

    /// Push a notification, evicting the oldest at capacity
    pub fn push(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        timestamp: DateTime<Local>,
    ) {
        if self.capacity == 0 {
            return;
        }

        let entry = Notification {
            id: self.next_id,
            severity,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Push a notification with current timestamp
    pub fn push_now(&mut self, severity: Severity, message: impl Into<String>) {
        self.push(severity, message, Local::now());
    }

    /// Oldest to newest
    pub fn entries(&self) -> &VecDeque<Notification> {
        &self.entries
    }

    /// Notifications at or above `severity`
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| n.severity >= severity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return everything
    pub fn drain(&mut self) -> Vec<Notification> {
        self.entries.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAPACITY)
    }
}

/// `ErrorReporter` that logs and records notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationReporter {
    state: Arc<Mutex<NotificationState>>,
}

impl NotificationReporter {
    pub fn new(state: Arc<Mutex<NotificationState>>) -> Self {
        Self { state }
    }

    /// Shared notification state
    pub fn state(&self) -> Arc<Mutex<NotificationState>> {
        self.state.clone()
    }

    /// Remove and return recorded notifications
    pub fn drain(&self) -> Vec<Notification> {
        self.state.lock().drain()
    }
}

impl ErrorReporter for NotificationReporter {
    fn report(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!(%message, "Notification"),
            Severity::Warning => tracing::warn!(%message, "Notification"),
            Severity::Info | Severity::Success => tracing::info!(%message, "Notification"),
        }
        self.state.lock().push_now(severity, message);
    }
}
