//! Table Component
//!
//! A reusable paginated, filterable, sortable table controller and the
//! pieces views build on it.

pub mod column;
pub mod controller;
pub mod data_provider;
pub mod pagination;
pub mod ports;
pub mod state;

pub use column::{Column, ColumnWidth};
pub use controller::{LoadOutcome, TableController, TableOptions, TablePorts};
pub use data_provider::{DataSource, PageQuery, VecDataSource};
pub use pagination::PaginationInfo;
pub use ports::{ErrorReporter, NullRenderer, Renderer, Severity};
pub use state::{Page, SortState, TableState};
