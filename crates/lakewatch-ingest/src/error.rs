//! Error types for the ingestion pipeline.

use thiserror::Error;

/// Errors that can occur during an ingestion run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Logging could not be initialized.
    #[error("logging setup error: {0}")]
    Logging(#[from] lakewatch_common::LoggingError),

    /// HTTP request error fetching the feed.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// A reading could not be encoded as a BSON document.
    #[error("BSON encode error: {0}")]
    BsonEncode(#[from] bson::ser::Error),

    /// The store reported an error.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The store accepted an upsert but returned no record identifier.
    #[error("store returned no identifier for upserted {collection} record")]
    MissingId {
        /// Collection the upsert targeted.
        collection: &'static str,
    },
}
