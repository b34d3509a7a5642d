//! Logging bootstrap for the binaries.
//!
//! Logs go to a daily rolling file under `logs/` and, optionally, to stdout.
//! The filter comes from `LOG_LEVEL` in the environment, falling back to the
//! configured default directive.

use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR: &str = "logs";

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(log_file: &str, default_directive: &str, log_to_stdout: bool) -> WorkerGuard {
    fs::create_dir_all(LOG_DIR).ok();

    let file_appender = rolling::daily(LOG_DIR, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing_subscriber::{EnvFilter, prelude::*};
    use util::config::DEFAULT_LOG_DIRECTIVE;

    #[test]
    fn default_directive_enables_every_workspace_crate() {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "api::routes", Level::INFO));
            assert!(tracing::enabled!(target: "services::submission_service", Level::INFO));
            assert!(tracing::enabled!(target: "services::course_service", Level::INFO));
            assert!(tracing::enabled!(target: "marker::scorer", Level::INFO));
            assert!(tracing::enabled!(target: "db", Level::INFO));

            assert!(!tracing::enabled!(target: "services::submission_service", Level::DEBUG));
            assert!(!tracing::enabled!(target: "sqlx::query", Level::INFO));
        });
    }
}
