//! Tracing setup
//!
//! The terminal belongs to the UI, so log output only goes to a file, and
//! only when one was asked for. The filter defaults to `info`; override it
//! with `RUST_LOG`, e.g. `RUST_LOG="tui_dispatch=debug"` to see every
//! reel tick.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, prelude::*, registry, EnvFilter};

use crate::config::ConfigError;

/// Install a file subscriber writing to `path` (appending).
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init(path: &Path) -> Result<WorkerGuard, ConfigError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ConfigError::LogFile)?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .with(filter)
        .init();

    tracing::info!(log_file = %path.display(), "Setup file logging");
    Ok(guard)
}
