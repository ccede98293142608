//! Process-wide logging setup: a file layer capturing debug and above,
//! and a stderr layer for info and above. Initialised once per run.
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::Result;

pub const DEFAULT_LOG_FILENAME: &str = "barcode_reader.log";

/// Configure logging for the application and return the log file path.
///
/// The file is opened append/create with missing parent directories
/// created first. A second call in the same process keeps the
/// subscriber installed by the first one and still returns the
/// resolved path.
pub fn init(log_path: Option<PathBuf>) -> Result<PathBuf> {
    let log_path = match log_path {
        Some(path) => path,
        None => std::env::current_dir()?.join(DEFAULT_LOG_FILENAME),
    };

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .with_filter(LevelFilter::DEBUG);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::INFO);

    // Repeat initialisation keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    debug!("Logging configured. Writing to {}", log_path.display());
    Ok(log_path)
}
