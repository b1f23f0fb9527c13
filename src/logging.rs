//! Logging configuration using tracing.
//!
//! The TUI owns the terminal, so all diagnostics go to a daily-rotated file.

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{log_dir, DEFAULT_LOG_FILTER, LOG_ENV, LOG_FILE_NAME};

/// Initialize the logging subsystem.
///
/// Logs are written to `~/.local/share/trendscope/logs/`.
/// Log level is controlled by the `TRENDSCOPE_LOG` environment variable.
///
/// ```bash
/// TRENDSCOPE_LOG=debug trendscope
/// TRENDSCOPE_LOG=trendscope::api=trace trendscope
/// ```
pub fn init() -> Result<()> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("trendscope {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("log directory: {}", dir.display());

    Ok(())
}
