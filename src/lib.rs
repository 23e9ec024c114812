//! PrintFleet Dashboard Library
//!
//! Table, print-queue and task-distribution views for a 3D-printer fleet
//! backend. The reusable core is the search / filter / sort / paginate
//! [`components::table::TableController`]; the `printfleet` binary renders
//! its pages as text.

pub mod cli;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod utils;
