use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::{Environment, Error};

const LOG_FILE_PREFIX: &str = "kikoo.log";

/// Picks the filter directive. An explicit `KIKOO_LOG` wins, `--verbose`
/// falls back to `debug`, otherwise logging stays off.
pub fn resolve_filter(env: &Environment, verbose: bool) -> Option<String> {
    match (&env.log_filter, verbose) {
        (Some(filter), _) => Some(filter.clone()),
        (None, true) => Some("debug".to_string()),
        (None, false) => None,
    }
}

/// Installs a file-backed subscriber.
///
/// Logs go to a daily-rolling file in `env.log_dir`, never to stdout or
/// stderr, so they cannot interleave with printed lines. The returned guard
/// must be held until exit to flush buffered events.
pub fn init(env: &Environment, verbose: bool) -> Result<Option<WorkerGuard>, Error> {
    let Some(directive) = resolve_filter(env, verbose) else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| Error::Logging(format!("invalid filter '{directive}': {e}")))?;

    std::fs::create_dir_all(&env.log_dir).map_err(|e| {
        Error::Logging(format!("cannot create {}: {e}", env.log_dir.display()))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(&env.log_dir)
        .map_err(|e| Error::Logging(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(log_dir = %env.log_dir.display(), %directive, "Logging initialized");
    Ok(Some(guard))
}
