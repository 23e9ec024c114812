//! State - Shared View State
//!
//! State that outlives a single operation and is shared between views.

pub mod notification_state;

pub use notification_state::{Notification, NotificationReporter, NotificationState};
