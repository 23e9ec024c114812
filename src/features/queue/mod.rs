//! Queue Feature
//!
//! Print-queue board: every printer with its queued model runs.

pub mod controller;
pub mod page;

pub use controller::{QueueBoard, QueueSource};
pub use page::format_board;
