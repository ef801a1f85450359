//! Subscriber initialization for the lakewatch binaries.
//!
//! Both tools configure logging from their config file rather than from the
//! environment: a severity string resolved against the fixed [`Level`] set,
//! and either a log file (append mode) or the console. An unrecognized level
//! is a hard error; there is no fallback severity.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use thiserror::Error;
use tracing::Level;

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level string is not one of the known severities.
    #[error("unrecognized log level: {0:?}")]
    UnrecognizedLevel(String),

    /// The log file could not be opened.
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),

    /// A global subscriber was already installed.
    #[error("logging was already initialized")]
    AlreadyInitialized,
}

/// Resolve a level string (e.g. `"INFO"`, `"debug"`) against the fixed set
/// of [`Level`] severities.
pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    Level::from_str(level).map_err(|_| LoggingError::UnrecognizedLevel(level.to_string()))
}

/// Initialize the global subscriber writing to `path` in append mode.
///
/// The file is created if it does not exist. ANSI escapes are disabled and
/// the event target is suppressed, so lines come out as
/// `timestamp LEVEL message`.
pub fn init_file(level: &str, path: &Path) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Initialize the global subscriber writing to stderr.
pub fn init_console(level: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_severities() {
        assert_eq!(parse_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("Warn").unwrap(), Level::WARN);
        assert_eq!(parse_level("ERROR").unwrap(), Level::ERROR);
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
    }

    #[test]
    fn test_parse_level_unrecognized() {
        let err = parse_level("LOUD").unwrap_err();
        assert!(matches!(err, LoggingError::UnrecognizedLevel(_)));
        assert!(err.to_string().contains("LOUD"));
    }
}
