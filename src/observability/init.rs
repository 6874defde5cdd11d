//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an environment filter and a
//! file-backed fmt layer, so interactive rendering on stdout is never mixed
//! with log output.

use crate::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a file-backed log writer.
///
/// The filter directive comes from `config.trace_level` (default `"info"`);
/// `RUST_LOG`-style directives like `airwatch=debug` are accepted. Log
/// lines are written to `airwatch.log` inside the data directory through a
/// non-blocking appender.
///
/// Returns the appender's worker guard, which the caller must keep alive
/// for the duration of the process so buffered lines are flushed on exit.
/// Returns `None` and leaves tracing uninitialized when the data directory
/// cannot be created; logging is optional, the dashboard still runs.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = tracing_appender::rolling::never(&data_dir, "airwatch.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false),
    );

    let _ = subscriber.try_init();

    Some(guard)
}
