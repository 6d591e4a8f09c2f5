// Logging configuration for the leaderboard report
//
// The report itself goes to stdout, so logs only ever go to stderr or a file.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Initialize logging with optional stderr and file outputs.
///
/// # Arguments
/// * `enable_console` - If true, logs will be written to stderr
/// * `log_file_path` - If Some, logs will be written to this file
/// * `verbose` - If true, this crate logs at DEBUG level
///
/// The returned guards flush buffered messages when dropped; keep them alive
/// until the program exits.
#[must_use]
pub fn init_logging(
    enable_console: bool,
    log_file_path: Option<PathBuf>,
    verbose: bool,
) -> Vec<WorkerGuard> {
    let mut guards = Vec::new();

    // Filter: WARN by default, RUST_LOG honoured
    let mut filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    if verbose {
        if let Ok(directive) = "leaderboard_report=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    let file_layer = log_file_path.and_then(|path| {
        let parent = path.parent()?;
        let file_name = path.file_name()?.to_str()?;

        let file_appender = tracing_appender::rolling::never(parent, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
    });

    let console_layer = if enable_console {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        guards.push(guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
    } else {
        None
    };

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guards
}
