//! Structured logging.

use std::fs::OpenOptions;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Errors raised during logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The operational log file could not be opened for append.
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber was already installed.
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize the tracing subscriber.
///
/// Installs an stdout layer and a non-ANSI layer appending to the
/// configured log file. `RUST_LOG` overrides the configured level.
pub fn init(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|source| LoggingError::OpenLogFile {
            path: config.log_file.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "movie_gateway={level},tower_http={level}",
            level = config.log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(log_file = %config.log_file, "Logging running");
    Ok(())
}
