//! TableController
//!
//! Turns user interaction (search, status filter, sort, paging) into pages of
//! server-supplied records.
//!
//! ## Paging model
//!
//! ```text
//! load() ──► DataSource (skip=0, limit=fetch_limit, sort_by, sort_desc)
//!              │ skip += limit until a batch comes back short
//!              ▼ every server-ordered record
//!        search filter ─► status filter ─► page slice ─► Renderer
//! ```
//!
//! Sorting is delegated to the server; filtering and paging are local, so
//! page navigation never issues a request.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use futures::future::{AbortHandle, Abortable};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::data_provider::{DataSource, PageQuery};
use super::pagination::PaginationInfo;
use super::ports::{ErrorReporter, Renderer, Severity};
use super::state::{Page, SortState, TableState};
use crate::constants::{DEFAULT_FETCH_LIMIT, DEFAULT_PAGE_SIZE};
use crate::domain::record::Record;
use crate::domain::resource::ResourceKind;
use crate::error::{Error, Result};
use crate::i18n::{Locale, t};

/// Upper bound on batches per load, in case a backend ignores `skip`
const MAX_FETCH_BATCHES: usize = 1_000;

/// Construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Rows per page (default 10)
    pub page_size: Option<usize>,
    /// Records requested per batch while loading (default 100)
    pub fetch_limit: Option<usize>,
    /// Language of reported messages
    pub locale: Locale,
}

/// Collaborators a table is wired to
#[derive(Clone)]
pub struct TablePorts {
    pub source: Arc<dyn DataSource>,
    pub renderer: Arc<dyn Renderer>,
    pub reporter: Arc<dyn ErrorReporter>,
}

/// What happened to a `load()` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Response applied and rendered
    Applied { count: usize },
    /// A newer load was issued; response dropped
    Stale,
    /// Table unmounted; nothing applied
    Cancelled,
    /// Request failed and was reported; state untouched
    Failed { message: String },
}

/// Controller for one logical table
pub struct TableController {
    table_id: String,
    kind: ResourceKind,
    fetch_limit: usize,
    locale: Locale,
    ports: TablePorts,
    state: Mutex<TableState>,
    latest_request: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
    mounted: AtomicBool,
}

impl TableController {
    /// Bind a controller to a table id (`printers-table`, `models`, ...)
    pub fn configure(
        table_id: impl Into<String>,
        options: TableOptions,
        ports: TablePorts,
    ) -> Result<Self> {
        let table_id = table_id.into();
        let kind = ResourceKind::from_table_id(&table_id)?;

        let page_size = options.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(Error::config(format!(
                "{table_id}: page size must be a positive integer"
            )));
        }
        let fetch_limit = options.fetch_limit.unwrap_or(DEFAULT_FETCH_LIMIT);
        if fetch_limit == 0 {
            return Err(Error::config(format!(
                "{table_id}: fetch limit must be a positive integer"
            )));
        }

        debug!(table = %table_id, %kind, page_size, fetch_limit, "Table configured");

        Ok(Self {
            table_id,
            kind,
            fetch_limit,
            locale: options.locale,
            ports,
            state: Mutex::new(TableState::new(page_size)),
            latest_request: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            mounted: AtomicBool::new(true),
        })
    }

    // ==================== Getters ====================

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn page_size(&self) -> usize {
        self.state.lock().page_size()
    }

    pub fn search_term(&self) -> String {
        self.state.lock().search_term().to_string()
    }

    pub fn status_filter(&self) -> String {
        self.state.lock().status_filter().to_string()
    }

    pub fn sort(&self) -> Option<SortState> {
        self.state.lock().sort().cloned()
    }

    pub fn current_page(&self) -> usize {
        self.state.lock().current_page()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Current page and pagination metadata
    pub fn page(&self) -> Page {
        self.state.lock().page()
    }

    /// Prev/next availability for the current page
    pub fn pagination(&self) -> PaginationInfo {
        PaginationInfo::from(&self.page())
    }

    /// Query the next `load()` will send
    pub fn query(&self) -> PageQuery {
        let query = PageQuery::window(0, self.fetch_limit);
        match self.state.lock().sort() {
            Some(sort) => query.sorted(sort.column.clone(), sort.descending),
            None => query,
        }
    }

    // ==================== Operations ====================

    /// Fetch fresh records with the current sort and re-render.
    ///
    /// Only the most recently issued load may apply its response; an older
    /// in-flight request is aborted when a new one starts.
    pub async fn load(&self) -> LoadOutcome {
        if !self.is_mounted() {
            return LoadOutcome::Cancelled;
        }

        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let query = self.query();
        let (abort_handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.in_flight.lock().replace(abort_handle) {
            previous.abort();
        }

        debug!(table = %self.table_id, token, ?query, "Loading table data");
        let fetched = Abortable::new(self.fetch_all(query), registration).await;

        let Ok(result) = fetched else {
            debug!(table = %self.table_id, token, "Load aborted");
            return self.dropped_outcome();
        };

        if !self.is_current(token) {
            debug!(table = %self.table_id, token, "Dropping stale response");
            return self.dropped_outcome();
        }
        self.in_flight.lock().take();

        match result {
            Ok(records) => {
                let count = records.len();
                let page = {
                    let mut state = self.state.lock();
                    state.replace_records(records);
                    state.page()
                };
                debug!(table = %self.table_id, count, page = page.page, "Table data applied");
                self.emit(&page);
                LoadOutcome::Applied { count }
            }
            Err(err) => {
                let message = format!("{}: {err}", t(self.locale, "error-load-data"));
                warn!(table = %self.table_id, error = %err, "Table load failed");
                self.ports.reporter.report(&message, Severity::Error);
                LoadOutcome::Failed { message }
            }
        }
    }

    /// Filter by a case-insensitive substring of any field; back to page 1
    pub fn set_search_term(&self, term: impl Into<String>) {
        let page = {
            let mut state = self.state.lock();
            state.set_search_term(term);
            state.page()
        };
        self.emit(&page);
    }

    /// Filter by exact status (`all` disables); back to page 1
    pub fn set_status_filter(&self, value: impl Into<String>) {
        let page = {
            let mut state = self.state.lock();
            state.set_status_filter(value);
            state.page()
        };
        self.emit(&page);
    }

    /// Toggle ordering on `column` and reload from the server
    pub async fn sort_by(&self, column: &str) -> LoadOutcome {
        {
            let mut state = self.state.lock();
            let sort = state.toggle_sort(column);
            debug!(
                table = %self.table_id,
                column = %sort.column,
                descending = sort.descending,
                "Sort changed"
            );
        }
        self.load().await
    }

    /// Show page `n`; false (and no change) outside `1..=total_pages`
    pub fn go_to_page(&self, n: usize) -> bool {
        let page = {
            let mut state = self.state.lock();
            if !state.go_to_page(n) {
                return false;
            }
            state.page()
        };
        self.emit(&page);
        true
    }

    pub fn next_page(&self) -> bool {
        self.go_to_page(self.current_page() + 1)
    }

    pub fn prev_page(&self) -> bool {
        match self.current_page() {
            0 | 1 => false,
            current => self.go_to_page(current - 1),
        }
    }

    /// Detach from the view: abort in-flight work and stop rendering
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::SeqCst) {
            if let Some(handle) = self.in_flight.lock().take() {
                handle.abort();
            }
            debug!(table = %self.table_id, "Table unmounted");
        }
    }

    /// Walk the collection in `fetch_limit` batches; any failed batch fails the load
    async fn fetch_all(&self, mut query: PageQuery) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for _ in 0..MAX_FETCH_BATCHES {
            let batch = self.ports.source.fetch_page(self.kind, query.clone()).await?;
            let exhausted = batch.len() < query.limit;
            records.extend(batch);
            if exhausted {
                return Ok(records);
            }
            query.skip += query.limit;
        }
        warn!(
            table = %self.table_id,
            count = records.len(),
            "Stopped after {MAX_FETCH_BATCHES} batches"
        );
        Ok(records)
    }

    fn is_current(&self, token: u64) -> bool {
        self.is_mounted() && self.latest_request.load(Ordering::SeqCst) == token
    }

    fn dropped_outcome(&self) -> LoadOutcome {
        if self.is_mounted() {
            LoadOutcome::Stale
        } else {
            LoadOutcome::Cancelled
        }
    }

    fn emit(&self, page: &Page) {
        if self.is_mounted() {
            self.ports.renderer.render(page);
        }
    }
}

impl std::fmt::Debug for TableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableController")
            .field("table_id", &self.table_id)
            .field("kind", &self.kind)
            .field("fetch_limit", &self.fetch_limit)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
