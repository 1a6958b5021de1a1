//! Tracing subscriber wiring.
//!
//! Three outputs: console (ANSI), `combined.log` (all levels that pass the
//! configured filter), and `error.log` (ERROR only). Files are opened in
//! append mode inside the configured log directory.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use msgrelay_core::error::{RelayError, Result};

use crate::config::LogConfig;

pub fn init(cfg: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&cfg.level)
        .map_err(|e| RelayError::BadRequest(format!("invalid LOG_LEVEL {:?}: {e}", cfg.level)))?;

    let combined = open_log(&cfg.dir.join("combined.log"))?;
    let errors = open_log(&cfg.dir.join("error.log"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(combined)))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(errors))
                .with_filter(LevelFilter::ERROR),
        )
        .try_init()
        .map_err(|e| RelayError::Internal(format!("logging init failed: {e}")))
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RelayError::Internal(format!("open log file {}: {e}", path.display())))
}
