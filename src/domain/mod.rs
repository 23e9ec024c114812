//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on any display surface and represent the fleet domain.

pub mod config;
pub mod queue;
pub mod record;
pub mod resource;
pub mod task;
