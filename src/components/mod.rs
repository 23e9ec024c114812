//! Components - Reusable View Components
//!
//! Display-agnostic building blocks that don't do I/O themselves.

pub mod table;
