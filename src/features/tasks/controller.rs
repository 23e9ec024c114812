//! Tasks Controller
//!
//! Validates the distribution form and submits it to the backend.

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::components::table::{ErrorReporter, Severity};
use crate::domain::task::{AssignedTask, DistributionResponse, TaskForm, TaskRequest};
use crate::error::{Error, Result};
use crate::i18n::{Locale, t, t_args};
use crate::services::ApiClient;

/// Backend call that splits a job across printers
pub trait TaskSink: Send + Sync {
    fn distribute(&self, request: TaskRequest) -> BoxFuture<'_, Result<DistributionResponse>>;
}

impl TaskSink for ApiClient {
    fn distribute(&self, request: TaskRequest) -> BoxFuture<'_, Result<DistributionResponse>> {
        Box::pin(async move { self.distribute_tasks(&request).await })
    }
}

/// Task distribution form controller
pub struct TaskDistributor {
    sink: Arc<dyn TaskSink>,
    reporter: Arc<dyn ErrorReporter>,
    locale: Locale,
    last: Mutex<Vec<AssignedTask>>,
}

impl TaskDistributor {
    pub fn new(sink: Arc<dyn TaskSink>, reporter: Arc<dyn ErrorReporter>, locale: Locale) -> Self {
        Self {
            sink,
            reporter,
            locale,
            last: Mutex::new(Vec::new()),
        }
    }

    /// Assignments from the last accepted submission
    pub fn last_assignments(&self) -> Vec<AssignedTask> {
        self.last.lock().clone()
    }

    /// Validate and submit the form.
    ///
    /// Invalid input is reported as a warning and never sent.
    pub async fn submit(&self, form: &TaskForm) -> Result<Vec<AssignedTask>> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.reporter.report(&err.to_string(), Severity::Warning);
                return Err(err);
            }
        };

        let material = request.material.clone();
        let result = match self.sink.distribute(request).await {
            Ok(response) => response.into_tasks(),
            Err(err) => Err(err),
        };

        match result {
            Ok(tasks) => {
                info!(%material, printers = tasks.len(), "Tasks distributed");
                self.reporter.report(
                    &t_args(self.locale, "success-distributed", &[("count", &tasks.len())]),
                    Severity::Success,
                );
                *self.last.lock() = tasks.clone();
                Ok(tasks)
            }
            Err(err) => {
                warn!(%material, error = %err, "Task distribution failed");
                let message = match &err {
                    Error::Distribution { detail } => detail.clone(),
                    other => format!("{}: {other}", t(self.locale, "error-distribute")),
                };
                self.reporter.report(&message, Severity::Error);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for TaskDistributor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDistributor")
            .field("locale", &self.locale)
            .field("last", &self.last.lock().len())
            .finish()
    }
}
