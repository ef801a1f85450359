//! # lakewatch-ingest
//!
//! Batch ingestion of sensor readings from the observatory network API into
//! MongoDB.
//!
//! One run performs a single pass:
//!
//! 1. Fetch the full JSON feed from the configured API endpoint.
//! 2. Walk the nested structure (organizations → sites → readings),
//!    de-duplicating organization and site records by exact content match.
//! 3. Stamp every reading with its site identifier and one shared fetch
//!    timestamp, then bulk-insert the whole batch.
//!
//! The store is reached through the [`Store`] trait so the pipeline can be
//! exercised against an in-memory implementation in tests; production runs
//! use [`MongoStore`].
//!
//! ## Example
//!
//! ```no_run
//! use lakewatch_ingest::{fetch_feed, http_client, ingest_feed, IngestConfig, MongoStore};
//!
//! let config = IngestConfig::load("config.yaml".as_ref())?;
//! let store = MongoStore::connect(&config.mongo)?;
//! let client = http_client()?;
//! let feed = fetch_feed(&client, &config.api.uri)?;
//! let report = ingest_feed(&store, &feed, chrono::Utc::now())?;
//! println!("inserted {} readings", report.readings_inserted);
//! # Ok::<(), lakewatch_ingest::IngestError>(())
//! ```

mod config;
mod error;
mod fetch;
mod ingest;
mod model;
mod store;

pub use config::{ApiConfig, IngestConfig, LoggingConfig, MongoConfig};
pub use error::IngestError;
pub use fetch::{fetch_feed, http_client};
pub use ingest::{ingest_feed, IngestReport};
pub use model::{reading_document, Feed, Organization, RawReading, Site};
pub use store::{MongoStore, Store, StoreCollection};

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
