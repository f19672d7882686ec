//! File-based tracing setup.
//!
//! stdout carries the MCP protocol, so all diagnostics go to a daily-rolling log file
//! written through a non-blocking worker. `RUST_LOG` takes precedence over the
//! configured level.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;
use crate::constants::{LOG_FILE_PREFIX, MAX_LOG_FILES};
use crate::error::{Error, Result};

const LOG_FILE_SUFFIX: &str = "log";

fn build_env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| Error::Logging(format!("Invalid log level '{level}': {e}"))),
    }
}

/// Install the global subscriber. The returned guard flushes pending records when
/// dropped and must live as long as the server.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let env_filter = build_env_filter(&config.log_level)?;

    fs::create_dir_all(&config.log_dir).map_err(|e| {
        Error::Logging(format!(
            "Failed to create log directory {}: {e}",
            config.log_dir.display()
        ))
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&config.log_dir)
        .map_err(|e| Error::Logging(format!("Failed to create log file appender: {e}")))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::Logging(format!("Failed to install subscriber: {e}")))?;

    Ok(guard)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        // Only meaningful when RUST_LOG is not set for the test process
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(
                build_env_filter("f1_mcp=notalevel"),
                Err(Error::Logging(_))
            ));
        }
    }

    #[test]
    fn test_directive_level_is_accepted() {
        assert!(build_env_filter("f1_mcp=debug,reqwest=warn").is_ok());
    }
}
