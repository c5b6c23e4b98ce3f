use thiserror::Error;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};

use crate::config::Config;

pub const LOG_FILE_NAME: &str = "mazepath.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file in {dir}: {source}")]
    Appender {
        dir: String,
        #[source]
        source: InitError,
    },
    #[error("a global tracing subscriber is already installed: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Routes `tracing` output to a log file so it never interleaves with the maze on stdout.
///
/// Keep the returned guard alive for the whole run; dropping it flushes the writer.
pub fn init(config: &Config) -> Result<WorkerGuard, LoggingError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&config.log_dir)
        .map_err(|source| LoggingError::Appender {
            dir: config.log_dir.display().to_string(),
            source,
        })?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(LoggingError::Subscriber)?;
    Ok(guard)
}
