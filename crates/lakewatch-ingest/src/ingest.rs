//! The normalization walk: organizations → sites → readings.
//!
//! Parents are resolved before children, so every reading document refers to
//! a site identifier (and transitively an organization identifier) that was
//! established earlier in the same run. All readings are accumulated in
//! memory and written in a single batch at the end.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{reading_document, Feed};
use crate::store::{Store, StoreCollection};
use crate::Result;

/// Counts from one ingestion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestReport {
    /// Organizations seen in the feed (resolved or created).
    pub organizations: usize,
    /// Sites seen in the feed (resolved or created).
    pub sites: usize,
    /// Readings inserted by the final batch write.
    pub readings_inserted: usize,
}

/// Normalize `feed` into the store.
///
/// `fetch_time` is captured once by the caller and stamped onto every
/// reading, so all readings of one run share the same provenance timestamp.
/// Readings are always appended: a rerun over an unchanged feed inserts a
/// fresh full set.
pub fn ingest_feed<S: Store>(
    store: &S,
    feed: &Feed,
    fetch_time: DateTime<Utc>,
) -> Result<IngestReport> {
    let fetch_time = bson::DateTime::from_chrono(fetch_time);
    let mut report = IngestReport::default();
    let mut readings = Vec::new();

    for org in &feed.list {
        debug!("organization {}: {}", org.id, org.name);
        let org_id = store.find_or_insert(StoreCollection::Organizations, &org.record())?;
        report.organizations += 1;

        for site in &org.sites {
            debug!("  site {}: {}", site.id, site.name);
            let site_id = store.find_or_insert(StoreCollection::Sites, &site.record(&org_id))?;
            report.sites += 1;

            for reading in &site.data {
                readings.push(reading_document(reading, &site_id, fetch_time)?);
            }
            debug!("    readings: {}", site.data.len());
        }
    }

    report.readings_inserted = store.insert_all(StoreCollection::Readings, readings)?;
    Ok(report)
}
