//! Document store access.
//!
//! The pipeline needs two operations: de-duplicating find-or-insert for
//! organization and site records, and one bulk insert for readings. They are
//! expressed as the [`Store`] trait so tests can run against an in-memory
//! implementation; [`MongoStore`] is the production backend.

use bson::{doc, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::sync::{Client, Database};
use tracing::debug;

use crate::config::MongoConfig;
use crate::{IngestError, Result};

/// The three collections written by an ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCollection {
    Organizations,
    Sites,
    Readings,
}

impl StoreCollection {
    /// Collection name in the store.
    pub const fn name(&self) -> &'static str {
        match self {
            StoreCollection::Organizations => "organizations",
            StoreCollection::Sites => "sites",
            StoreCollection::Readings => "readings",
        }
    }
}

/// Store operations used by the ingestion pipeline.
pub trait Store {
    /// Return the identifier of the record exactly matching `record`,
    /// inserting it first if no match exists. Calling this twice with
    /// identical records yields the same identifier and a single insert.
    fn find_or_insert(&self, collection: StoreCollection, record: &Document) -> Result<Bson>;

    /// Insert `records` in one batch and return how many were inserted.
    /// An empty batch is a no-op. Partial-failure semantics are the
    /// store's own; no transactional wrapping is applied.
    fn insert_all(&self, collection: StoreCollection, records: Vec<Document>) -> Result<usize>;
}

/// MongoDB-backed [`Store`].
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect using the discrete credential fields from the config.
    ///
    /// The database is the configured deployment name.
    pub fn connect(config: &MongoConfig) -> Result<Self> {
        let client = Client::with_uri_str(config.connection_uri())?;
        let db = client.database(&config.deployment);
        Ok(Self { db })
    }
}

impl Store for MongoStore {
    fn find_or_insert(&self, collection: StoreCollection, record: &Document) -> Result<Bson> {
        // Atomic upsert: match on the full record and only set fields when
        // inserting, so an equivalent record is never duplicated even when
        // two runs race.
        let result = self
            .db
            .collection::<Document>(collection.name())
            .find_one_and_update(record.clone(), doc! { "$setOnInsert": record.clone() })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .run()?;

        let document = result.ok_or(IngestError::MissingId {
            collection: collection.name(),
        })?;
        document
            .get("_id")
            .cloned()
            .ok_or(IngestError::MissingId {
                collection: collection.name(),
            })
    }

    fn insert_all(&self, collection: StoreCollection, records: Vec<Document>) -> Result<usize> {
        if records.is_empty() {
            debug!("no documents to insert into {}", collection.name());
            return Ok(0);
        }
        let result = self
            .db
            .collection::<Document>(collection.name())
            .insert_many(records)
            .run()?;
        Ok(result.inserted_ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names() {
        assert_eq!(StoreCollection::Organizations.name(), "organizations");
        assert_eq!(StoreCollection::Sites.name(), "sites");
        assert_eq!(StoreCollection::Readings.name(), "readings");
    }
}
