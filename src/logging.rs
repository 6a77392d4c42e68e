//! Log file setup.
//!
//! The subscriber is installed once at process start and stays active for
//! the lifetime of the returned [`LoggingGuard`]. Dropping the guard
//! uninstalls it and flushes the log file.

use crate::error::{PipelineError, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Timestamp layout of each log line
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Keeps the pipeline subscriber installed; flushes the log file on drop
pub struct LoggingGuard {
    log_file: Arc<File>,
    log_path: PathBuf,
    _default: DefaultGuard,
}

impl LoggingGuard {
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        let _ = (&*self.log_file).flush();
    }
}

/// Truncate `log_path` and route INFO and above into it
///
/// With `verbose`, events are mirrored to stderr filtered by `RUST_LOG`
/// (default `sensor_processor=debug`).
pub fn init(log_path: &Path, verbose: bool) -> Result<LoggingGuard> {
    let log_file = File::create(log_path).map_err(|e| PipelineError::Logging {
        path: log_path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let log_file = Arc::new(log_file);

    let file_layer = fmt::layer()
        .with_writer(Arc::clone(&log_file))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_filter(LevelFilter::INFO);

    let console_layer = verbose.then(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sensor_processor=debug"));

        fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
            .with_filter(filter)
    });

    let default_guard = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .set_default();

    debug!("Logging initialized, writing to {}", log_path.display());

    Ok(LoggingGuard {
        log_file,
        log_path: log_path.to_path_buf(),
        _default: default_guard,
    })
}
