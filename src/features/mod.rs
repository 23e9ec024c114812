//! Features - Vertical Feature Slices
//!
//! Each feature contains its page (text rendering) and controller.

pub mod queue;
pub mod tables;
pub mod tasks;
