//! Dashboard Constants
//!
//! Centralized defaults shared by tables, the queue board and the API client.

/// Rows shown per table page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Records requested per table load (the backend's own default limit)
pub const DEFAULT_FETCH_LIMIT: usize = 100;

/// Status filter value that disables status filtering
pub const STATUS_FILTER_ALL: &str = "all";

/// Field interpreted by the status filter
pub const STATUS_FIELD: &str = "status";

/// Queue board refresh interval
pub const QUEUE_REFRESH_SECS: u64 = 30;

/// HTTP request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Default backend address
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Notification log capacity
pub const NOTIFICATION_CAPACITY: usize = 200;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
