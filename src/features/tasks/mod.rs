//! Tasks Feature
//!
//! Task distribution form and its result cards.

pub mod controller;
pub mod page;

pub use controller::{TaskDistributor, TaskSink};
pub use page::format_assignments;
