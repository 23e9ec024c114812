//! Service Layer
//!
//! The service layer talks to the fleet backend and runs async work:
//! HTTP access, the runtime bridge and periodic refresh loops.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  ApiClient (reqwest)                         │
//! │   ├─ DataSource for tables                   │
//! │   └─ queue / task-distribution calls         │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼ records, queue items
//! ┌──────────────────────────────────────────────┐
//! │  TableController / QueueBoard                │
//! │  (driven by runtime + refresh loops)         │
//! └──────────────────────────────────────────────┘
//! ```

mod api;
mod refresh;
mod runtime;

pub use api::*;
pub use refresh::*;
pub use runtime::*;
