//! Tokio Runtime Bridge
//!
//! The command-line entry point is synchronous; table loads, the queue board
//! and auto-refresh loops are async. This module owns the process-wide tokio
//! runtime they run on.
//!
//! ## Pattern
//!
//! ```text
//! main()
//!   │
//!   ▼
//! block_on(async { controller.load().await })
//!   │
//!   ├── spawn_named("auto-refresh", ...)   detached loops
//!   ▼
//! result returned to main
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
pub fn runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name("printfleet-worker")
        .build()
        .map_err(|source| Error::Io { source })?;

    // A concurrent initializer may have won; its runtime is kept.
    Ok(TOKIO_RUNTIME.get_or_init(|| runtime))
}

/// Block on a future synchronously (entry points only)
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(runtime()?.block_on(future))
}

/// Spawn a task with a name (for debugging)
pub fn spawn_named<F>(name: &'static str, future: F) -> Result<JoinHandle<()>>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    Ok(runtime()?.spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    }))
}
