//! Auto-Refresh
//!
//! Periodic reload loops for tables and the queue board. A loop ends when its
//! handle is stopped or dropped, or when the tick reports the view is gone.

use std::future::Future;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::runtime::spawn_named;
use crate::components::table::{LoadOutcome, TableController};
use crate::error::Result;

/// Owner of a running refresh loop; dropping it stops the loop
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the loop
    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `tick` immediately and then every `every` until it breaks
pub fn spawn_periodic<F, Fut>(
    name: &'static str,
    every: Duration,
    mut tick: F,
) -> Result<RefreshHandle>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ControlFlow<()>> + Send + 'static,
{
    let task = spawn_named(name, async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tick().await.is_break() {
                break;
            }
        }
    })?;
    Ok(RefreshHandle { task })
}

/// Reload a table every `every` until it is unmounted
pub fn spawn_table_refresh(
    controller: Arc<TableController>,
    every: Duration,
) -> Result<RefreshHandle> {
    spawn_periodic("table-refresh", every, move || {
        let controller = controller.clone();
        async move {
            match controller.load().await {
                LoadOutcome::Cancelled => {
                    tracing::debug!(table = controller.table_id(), "Auto-refresh stopped");
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            }
        }
    })
}
