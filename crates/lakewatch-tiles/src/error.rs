//! Error types for the tile bundler.

use thiserror::Error;

/// Errors that can occur while bundling tiles.
#[derive(Debug, Error)]
pub enum TileError {
    /// I/O error reading config or writing a tile file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Logging could not be initialized.
    #[error("logging setup error: {0}")]
    Logging(#[from] lakewatch_common::LoggingError),

    /// HTTP transport error while fetching a tile.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured place has no coordinates section.
    #[error("no coordinates configured for place {0:?}")]
    UnknownPlace(String),

    /// File logging was selected but no log file is configured.
    #[error("logging.filename is required when logging.console is false")]
    MissingLogFile,

    /// A tile request came back non-OK in strict mode.
    #[error("failed to download tile z={z} x={x} y={y}: {reason}")]
    TileDownloadFailed {
        /// Zoom level.
        z: u8,
        /// X tile coordinate.
        x: u32,
        /// Y tile coordinate.
        y: u32,
        /// Reason for failure.
        reason: String,
    },
}
