//! Tables Feature
//!
//! Printers, models and print-job tables: column sets and text rendering.

pub mod columns;
pub mod page;

pub use columns::columns_for;
pub use page::{PageSnapshot, TerminalRenderer, format_table};
