//! Queue Controller
//!
//! Loads every printer with its queue and submits new queue entries.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::{BoxFuture, try_join_all};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::components::table::{ErrorReporter, LoadOutcome, PageQuery, Severity};
use crate::constants::DEFAULT_FETCH_LIMIT;
use crate::domain::queue::{PrinterQueue, QueueForm, QueueItem, QueueRequest};
use crate::domain::record::Record;
use crate::domain::resource::ResourceKind;
use crate::error::{Error, Result};
use crate::i18n::{Locale, t};
use crate::services::ApiClient;

/// Upper bound on printer batches per refresh
const MAX_PRINTER_BATCHES: usize = 1_000;

/// Backend calls the queue board needs
pub trait QueueSource: Send + Sync {
    fn printers(&self, query: PageQuery) -> BoxFuture<'_, Result<Vec<Record>>>;
    fn printer_queue(&self, printer_id: i64) -> BoxFuture<'_, Result<Vec<QueueItem>>>;
    fn add_to_queue(&self, request: QueueRequest) -> BoxFuture<'_, Result<()>>;
}

impl QueueSource for ApiClient {
    fn printers(&self, query: PageQuery) -> BoxFuture<'_, Result<Vec<Record>>> {
        Box::pin(async move { self.fetch_records(ResourceKind::Printers, &query).await })
    }

    fn printer_queue(&self, printer_id: i64) -> BoxFuture<'_, Result<Vec<QueueItem>>> {
        Box::pin(ApiClient::printer_queue(self, printer_id))
    }

    fn add_to_queue(&self, request: QueueRequest) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { ApiClient::add_to_queue(self, &request).await })
    }
}

/// Per-printer queue board
pub struct QueueBoard {
    source: Arc<dyn QueueSource>,
    reporter: Arc<dyn ErrorReporter>,
    locale: Locale,
    fetch_limit: usize,
    queues: Mutex<Vec<PrinterQueue>>,
    latest_request: AtomicU64,
}

impl QueueBoard {
    pub fn new(
        source: Arc<dyn QueueSource>,
        reporter: Arc<dyn ErrorReporter>,
        locale: Locale,
    ) -> Self {
        Self {
            source,
            reporter,
            locale,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            queues: Mutex::new(Vec::new()),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Number of printers requested per refresh
    pub fn with_fetch_limit(mut self, fetch_limit: usize) -> Self {
        self.fetch_limit = fetch_limit.max(1);
        self
    }

    /// Last successfully loaded board
    pub fn queues(&self) -> Vec<PrinterQueue> {
        self.queues.lock().clone()
    }

    /// Reload printers and their queues.
    ///
    /// A failure keeps the previous board; a refresh overtaken by a newer one
    /// is dropped.
    pub async fn refresh(&self) -> LoadOutcome {
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, "Refreshing queue board");

        match self.fetch_board().await {
            Ok(board) => {
                if self.latest_request.load(Ordering::SeqCst) != token {
                    debug!(token, "Dropping stale queue board");
                    return LoadOutcome::Stale;
                }
                let count = board.len();
                *self.queues.lock() = board;
                LoadOutcome::Applied { count }
            }
            Err(err) => {
                if self.latest_request.load(Ordering::SeqCst) != token {
                    return LoadOutcome::Stale;
                }
                let message = format!("{}: {err}", t(self.locale, "error-load-queue"));
                warn!(error = %err, "Queue board refresh failed");
                self.reporter.report(&message, Severity::Error);
                LoadOutcome::Failed { message }
            }
        }
    }

    /// Validate and submit the add-to-queue form, then refresh the board
    pub async fn add_to_queue(&self, form: &QueueForm) -> Result<()> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.reporter.report(&err.to_string(), Severity::Warning);
                return Err(err);
            }
        };

        let printer_id = request.printer_id;
        match self.source.add_to_queue(request).await {
            Ok(()) => {
                info!(printer_id, "Queued model run");
                self.reporter
                    .report(t(self.locale, "success-queue-added"), Severity::Success);
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!(printer_id, error = %err, "Add to queue failed");
                self.reporter.report(
                    &format!("{}: {err}", t(self.locale, "error-queue-add")),
                    Severity::Error,
                );
                Err(err)
            }
        }
    }

    async fn fetch_board(&self) -> Result<Vec<PrinterQueue>> {
        let mut printers = Vec::new();
        let mut query = PageQuery::window(0, self.fetch_limit);
        for _ in 0..MAX_PRINTER_BATCHES {
            let batch = self.source.printers(query.clone()).await?;
            let exhausted = batch.len() < query.limit;
            printers.extend(batch);
            if exhausted {
                break;
            }
            query.skip += query.limit;
        }

        let printers: Vec<(i64, String)> = printers
            .iter()
            .filter_map(|record| {
                let Some(id) = record.i64_field("id") else {
                    debug!("Skipping printer without id");
                    return None;
                };
                let name = record
                    .str_field("name")
                    .filter(|name| !name.is_empty())
                    .unwrap_or(t(self.locale, "unknown-printer"))
                    .to_string();
                Some((id, name))
            })
            .collect();

        let queues = try_join_all(printers.into_iter().map(|(printer_id, printer_name)| async move {
            let items = self.source.printer_queue(printer_id).await?;
            Ok::<_, Error>(PrinterQueue {
                printer_id,
                printer_name,
                items,
            })
        }))
        .await?;

        Ok(queues)
    }
}

impl std::fmt::Debug for QueueBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueBoard")
            .field("locale", &self.locale)
            .field("fetch_limit", &self.fetch_limit)
            .field("printers", &self.queues.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct StubQueueSource {
        printers: Vec<Record>,
        queues: HashMap<i64, Vec<QueueItem>>,
        fail_queue_for: Option<i64>,
        submitted: Mutex<Vec<QueueRequest>>,
    }

    impl QueueSource for StubQueueSource {
        fn printers(&self, query: PageQuery) -> BoxFuture<'_, Result<Vec<Record>>> {
            let printers = self
                .printers
                .iter()
                .skip(query.skip)
                .take(query.limit)
                .cloned()
                .collect();
            Box::pin(async move { Ok(printers) })
        }

        fn printer_queue(&self, printer_id: i64) -> BoxFuture<'_, Result<Vec<QueueItem>>> {
            let result = if self.fail_queue_for == Some(printer_id) {
                Err(Error::HttpStatus {
                    url: "/queue/".to_string(),
                    status: 502,
                })
            } else {
                Ok(self.queues.get(&printer_id).cloned().unwrap_or_default())
            };
            Box::pin(async move { result })
        }

        fn add_to_queue(&self, request: QueueRequest) -> BoxFuture<'_, Result<()>> {
            self.submitted.lock().push(request);
            Box::pin(async { Ok(()) })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        reports: Mutex<Vec<(String, Severity)>>,
    }

    impl ErrorReporter for RecordingReporter {
        fn report(&self, message: &str, severity: Severity) {
            self.reports.lock().push((message.to_string(), severity));
        }
    }

    fn item(model: &str, quantity: i64, priority: i64) -> QueueItem {
        QueueItem {
            id: None,
            model_name: model.to_string(),
            quantity,
            priority,
        }
    }

    fn stub() -> StubQueueSource {
        StubQueueSource {
            printers: vec![
                Record::new().with("id", 1).with("name", "Prusa MK4"),
                Record::new().with("id", 2),
                Record::new().with("name", "no id"),
            ],
            queues: HashMap::from([(1, vec![item("Benchy", 2, 1), item("Gear", 5, 0)])]),
            ..Default::default()
        }
    }

    fn make_board(
        source: StubQueueSource,
    ) -> (QueueBoard, Arc<StubQueueSource>, Arc<RecordingReporter>) {
        let source = Arc::new(source);
        let reporter = Arc::new(RecordingReporter::default());
        let board = QueueBoard::new(source.clone(), reporter.clone(), Locale::EnUS);
        (board, source, reporter)
    }

    #[tokio::test]
    async fn refresh_loads_queue_per_printer() {
        let (board, _, reporter) = make_board(stub());

        assert_eq!(board.refresh().await, LoadOutcome::Applied { count: 2 });

        let queues = board.queues();
        assert_eq!(queues[0].printer_name, "Prusa MK4");
        assert_eq!(queues[0].items.len(), 2);
        assert_eq!(queues[1].printer_name, "Unknown Printer");
        assert!(queues[1].items.is_empty());
        assert!(reporter.reports.lock().is_empty());
    }

    #[tokio::test]
    async fn refresh_walks_printers_past_fetch_limit() {
        let source = StubQueueSource {
            printers: (1..=5).map(|i| Record::new().with("id", i)).collect(),
            ..Default::default()
        };
        let (board, _, _) = make_board(source);
        let board = board.with_fetch_limit(2);

        assert_eq!(board.refresh().await, LoadOutcome::Applied { count: 5 });
        let ids: Vec<i64> = board.queues().iter().map(|q| q.printer_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn failed_queue_keeps_previous_board() {
        let (board, _, _) = make_board(stub());
        board.refresh().await;

        let failing = StubQueueSource {
            fail_queue_for: Some(2),
            ..stub()
        };
        let (failing_board, _, reporter) = make_board(failing);
        *failing_board.queues.lock() = board.queues();

        let outcome = failing_board.refresh().await;
        assert!(matches!(outcome, LoadOutcome::Failed { .. }));
        assert_eq!(failing_board.queues().len(), 2);

        let reports = reporter.reports.lock();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].0.starts_with("Failed to load printers or queues"));
        assert_eq!(reports[0].1, Severity::Error);
    }

    #[tokio::test]
    async fn add_to_queue_submits_and_confirms() {
        let (board, source, reporter) = make_board(stub());
        let form = QueueForm {
            printer_id: "1".to_string(),
            model_id: "4".to_string(),
            quantity: "3".to_string(),
            priority: "2".to_string(),
        };

        board.add_to_queue(&form).await.expect("queued");

        let submitted = source.submitted.lock();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].priority, 2);
        assert_eq!(
            reporter.reports.lock()[0],
            ("Successfully added to queue".to_string(), Severity::Success)
        );
        assert_eq!(board.queues().len(), 2);
    }

    #[tokio::test]
    async fn invalid_form_is_reported_not_sent() {
        let (board, source, reporter) = make_board(stub());
        let form = QueueForm {
            printer_id: "1".to_string(),
            model_id: "4".to_string(),
            quantity: "0".to_string(),
            priority: String::new(),
        };

        let err = board.add_to_queue(&form).await.expect_err("invalid");
        assert!(matches!(err, Error::Validation { .. }));
        assert!(source.submitted.lock().is_empty());
        assert_eq!(reporter.reports.lock()[0].1, Severity::Warning);
    }
}
