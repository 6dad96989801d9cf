//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::infrastructure::paths::{get_data_dir, LOG_FILE};
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the trace level
/// 2. Formats them as plain text lines
/// 3. Writes them to a rotating log file, or to stderr when file logging is
///    off or the data directory is unavailable
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `databook-viewer.log` inside the viewer data
/// directory, with 10 MB rotation and 3 retained backups.
///
/// # Initialization Behavior
///
/// Idempotent: only the first successful call installs a subscriber. Returns
/// whether this call installed it.
///
/// # Example
///
/// ```
/// use databook_viewer::observability::init_tracing;
/// use databook_viewer::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_to_file: false,
///     ..Config::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_writer = if config.log_to_file { log_writer() } else { None };
    let stderr_layer = file_writer
        .is_none()
        .then(|| fmt::layer().with_writer(std::io::stderr));
    let file_layer = file_writer.map(|writer| fmt::layer().with_ansi(false).with_writer(writer));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok()
}

fn log_writer() -> Option<RotatingFileWriter> {
    let data_dir = get_data_dir().ok()?;
    // Logging is optional; fall back to stderr if the directory is unusable.
    std::fs::create_dir_all(&data_dir).ok()?;
    Some(RotatingFileWriter::new(data_dir.join(LOG_FILE)))
}
