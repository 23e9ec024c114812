//! Command handlers for the `printfleet` binary.

use std::fs;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::args::{Commands, TableArgs};
use crate::components::table::{
    DataSource, LoadOutcome, Severity, TableController, TablePorts, VecDataSource,
};
use crate::domain::config::AppConfig;
use crate::domain::queue::QueueForm;
use crate::domain::record::Record;
use crate::domain::resource::ResourceKind;
use crate::domain::task::TaskForm;
use crate::error::{Error, Result};
use crate::features::queue::{QueueBoard, format_board};
use crate::features::tables::{PageSnapshot, TerminalRenderer, columns_for, format_table};
use crate::features::tasks::{TaskDistributor, format_assignments};
use crate::services::{ApiClient, block_on, spawn_periodic, spawn_table_refresh};
use crate::state::NotificationReporter;

/// Run one subcommand to completion
pub fn execute(command: Commands, config: &AppConfig) -> Result<()> {
    let reporter = NotificationReporter::default();
    let result = match command {
        Commands::Table(args) => table(&args, config, &reporter),
        Commands::Watch {
            kind,
            every,
            page_size,
        } => watch(kind, Duration::from_secs(every.max(1)), page_size, config, &reporter),
        Commands::Queue { watch } => queue(watch, config, &reporter),
        Commands::Enqueue {
            printer,
            model,
            quantity,
            priority,
        } => {
            let form = QueueForm {
                printer_id: printer,
                model_id: model,
                quantity,
                priority,
            };
            enqueue(&form, config, &reporter)
        }
        Commands::Distribute {
            material,
            accuracy,
            quantity,
        } => {
            let form = TaskForm {
                material,
                accuracy,
                quantity,
            };
            distribute(&form, config, &reporter)
        }
    };
    print_confirmations(&reporter);
    result
}

fn table(args: &TableArgs, config: &AppConfig, reporter: &NotificationReporter) -> Result<()> {
    let locale = config.locale;
    let source: Arc<dyn DataSource> = match &args.fixture {
        Some(path) => Arc::new(VecDataSource::new().with_records(args.kind, read_fixture(path)?)),
        None => Arc::new(ApiClient::new(&config.api)?),
    };

    let snapshot = Arc::new(PageSnapshot::default());
    let mut options = config.table_options();
    if args.page_size.is_some() {
        options.page_size = args.page_size;
    }
    let controller = TableController::configure(
        args.kind.table_id(),
        options,
        TablePorts {
            source,
            renderer: snapshot.clone(),
            reporter: Arc::new(reporter.clone()),
        },
    )?;

    let outcome = block_on(async {
        let Some(column) = &args.sort else {
            return controller.load().await;
        };
        let outcome = controller.sort_by(column).await;
        match outcome {
            LoadOutcome::Applied { .. } if args.desc => controller.sort_by(column).await,
            other => other,
        }
    })?;
    if let LoadOutcome::Failed { message } = outcome {
        return Err(Error::Load { message });
    }

    if let Some(term) = &args.search {
        controller.set_search_term(term.as_str());
    }
    if let Some(status) = &args.status {
        controller.set_status_filter(status.as_str());
    }
    if args.page > 1 && !controller.go_to_page(args.page) {
        warn!(
            page = args.page,
            total_pages = controller.pagination().total_pages,
            "Page out of range"
        );
    }

    let page = snapshot.last().unwrap_or_else(|| controller.page());
    let columns = columns_for(args.kind, locale);
    print!("{}", format_table(&columns, &page, controller.sort().as_ref(), locale));
    Ok(())
}

fn watch(
    kind: ResourceKind,
    every: Duration,
    page_size: Option<usize>,
    config: &AppConfig,
    reporter: &NotificationReporter,
) -> Result<()> {
    let locale = config.locale;
    let renderer = TerminalRenderer::stdout(columns_for(kind, locale), locale).clear_screen(true);
    let mut options = config.table_options();
    if page_size.is_some() {
        options.page_size = page_size;
    }
    let controller = Arc::new(TableController::configure(
        kind.table_id(),
        options,
        TablePorts {
            source: Arc::new(ApiClient::new(&config.api)?),
            renderer: Arc::new(renderer),
            reporter: Arc::new(reporter.clone()),
        },
    )?);

    info!(table = controller.table_id(), every_secs = every.as_secs(), "Watching table");
    block_on(async {
        let handle = spawn_table_refresh(controller.clone(), every)?;
        tokio::signal::ctrl_c().await?;
        controller.unmount();
        handle.stop();
        Ok::<(), Error>(())
    })?
}

fn queue(watch: bool, config: &AppConfig, reporter: &NotificationReporter) -> Result<()> {
    let locale = config.locale;
    let board = Arc::new(queue_board(config, reporter)?);

    if !watch {
        if let LoadOutcome::Failed { message } = block_on(board.refresh())? {
            return Err(Error::Load { message });
        }
        print!("{}", format_board(&board.queues(), locale));
        return Ok(());
    }

    let every = config.queue.refresh_interval();
    info!(every_secs = every.as_secs(), "Watching queue board");
    block_on(async {
        let tick_board = board.clone();
        let handle = spawn_periodic("queue-refresh", every, move || {
            let board = tick_board.clone();
            async move {
                if let LoadOutcome::Applied { .. } = board.refresh().await {
                    print!("\x1b[2J\x1b[H{}", format_board(&board.queues(), locale));
                }
                ControlFlow::Continue(())
            }
        })?;
        tokio::signal::ctrl_c().await?;
        handle.stop();
        Ok::<(), Error>(())
    })?
}

fn enqueue(form: &QueueForm, config: &AppConfig, reporter: &NotificationReporter) -> Result<()> {
    let board = queue_board(config, reporter)?;
    block_on(board.add_to_queue(form))??;
    print!("{}", format_board(&board.queues(), config.locale));
    Ok(())
}

fn distribute(form: &TaskForm, config: &AppConfig, reporter: &NotificationReporter) -> Result<()> {
    let distributor = TaskDistributor::new(
        Arc::new(ApiClient::new(&config.api)?),
        Arc::new(reporter.clone()),
        config.locale,
    );
    let tasks = block_on(distributor.submit(form))??;
    print!("{}", format_assignments(&tasks, config.locale));
    Ok(())
}

fn queue_board(config: &AppConfig, reporter: &NotificationReporter) -> Result<QueueBoard> {
    Ok(QueueBoard::new(
        Arc::new(ApiClient::new(&config.api)?),
        Arc::new(reporter.clone()),
        config.locale,
    )
    .with_fetch_limit(config.table.fetch_limit))
}

/// Records from a JSON array file
pub fn read_fixture(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Print confirmations; warnings and errors already went through tracing
fn print_confirmations(reporter: &NotificationReporter) {
    for notification in reporter.drain() {
        if notification.severity <= Severity::Success {
            println!("{}", notification.message);
        }
    }
}
