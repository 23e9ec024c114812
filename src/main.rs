//! PrintFleet Dashboard - Main Entry Point
//!
//! Terminal front-end for a 3D-printer fleet backend

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use printfleet_dashboard::cli::{self, Cli};
use printfleet_dashboard::domain::config::AppConfig;
use printfleet_dashboard::utils::config_store::load_config_or_default;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config =
        load_config_or_default(args.config.as_deref()).context("Failed to load configuration")?;
    cli::apply_overrides(&mut config, &args);

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&config)?;

    tracing::info!(
        base_url = %config.api.base_url,
        locale = %config.locale,
        "Starting PrintFleet Dashboard..."
    );

    cli::execute(args.command, &config)?;
    Ok(())
}

/// Log to stderr, plus a daily rolling file when `log_dir` is configured
fn init_tracing(config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "printfleet.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(guard)
}
