//! Deserialization types for the feed returned by the observatory API.
//!
//! The feed nests three levels: organizations contain sites, sites contain
//! readings. Organizations and sites carry a small fixed shape; readings are
//! free-form measurement objects whose fields we preserve verbatim, so they
//! stay as raw JSON maps until they are converted to BSON for insertion.

use bson::{doc, Bson, Document};
use serde::Deserialize;

use crate::Result;

/// One raw reading as supplied by the API: arbitrary key/value pairs.
pub type RawReading = serde_json::Map<String, serde_json::Value>;

/// Root structure of the feed.
#[derive(Debug, Deserialize)]
pub struct Feed {
    /// Organizations, each with its sites and their readings.
    pub list: Vec<Organization>,
}

/// An organization in the feed.
#[derive(Debug, Deserialize)]
pub struct Organization {
    /// External identifier assigned by the network.
    pub id: String,
    pub name: String,
    pub sites: Vec<Site>,
}

/// A monitoring site belonging to an organization.
#[derive(Debug, Deserialize)]
pub struct Site {
    /// External identifier assigned by the network.
    pub id: String,
    pub name: String,
    /// Readings reported for this site.
    pub data: Vec<RawReading>,
}

impl Organization {
    /// The minimal organization record stored for de-duplication: exactly
    /// `{name, id}`.
    pub fn record(&self) -> Document {
        doc! { "name": &self.name, "id": &self.id }
    }
}

impl Site {
    /// The minimal site record: `{name, id, org}` with the resolved parent
    /// organization identifier. A site under a different organization is a
    /// distinct record even when name and id match.
    pub fn record(&self, org_id: &Bson) -> Document {
        doc! { "name": &self.name, "id": &self.id, "org": org_id.clone() }
    }
}

/// Convert a raw reading into the document that gets inserted: all source
/// fields verbatim, plus `site` (owning site identifier) and `fetchTime`
/// (the run's shared timestamp), and nothing else.
pub fn reading_document(
    reading: &RawReading,
    site_id: &Bson,
    fetch_time: bson::DateTime,
) -> Result<Document> {
    let mut document = bson::to_document(reading)?;
    document.insert("site", site_id.clone());
    document.insert("fetchTime", fetch_time);
    Ok(document)
}
