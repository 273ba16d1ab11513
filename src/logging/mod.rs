//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so logs go to a file; watch them with
//! `tail -f` in a second terminal when debugging fetch behavior.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name or parent directory.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber was already installed.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based tracing.
///
/// Creates the log directory when missing. Respects `RUST_LOG`,
/// defaulting to the `info` level. ANSI escapes are disabled since the
/// output is a plain file.
///
/// # Errors
///
/// Fails when the directory cannot be created, the path has no file
/// name, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
