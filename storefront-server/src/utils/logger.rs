//! Logging Infrastructure
//!
//! Human readable output in development, JSON lines in production, with an
//! optional daily rolling file in place of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional file output.
///
/// `RUST_LOG` takes precedence over `log_level` when set. Files go to
/// `<log_dir>/storefront.<date>` and are only used if the directory exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            Some(tracing_appender::rolling::daily(dir_str, "storefront"))
        } else {
            None
        }
    });

    match (json, file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).init(),
        (true, None) => subscriber.json().init(),
        (false, Some(writer)) => subscriber.with_ansi(false).with_writer(writer).init(),
        (false, None) => subscriber.init(),
    }
}
