//! File-based logging setup for the terminal client.
//!
//! The TUI owns stdout/stderr, so log output goes to a rolling file via a
//! non-blocking appender. The returned guard must be held for the process
//! lifetime or buffered log lines are lost on exit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn setup_logging() -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "market.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// `MARKET_LOG_DIR` if set, else the platform data directory.
fn log_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MARKET_LOG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let dirs = directories::ProjectDirs::from("", "", "market")
        .context("Could not determine a log directory; set MARKET_LOG_DIR")?;
    Ok(dirs.data_dir().join("logs"))
}
