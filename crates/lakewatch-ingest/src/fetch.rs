//! Remote feed fetching.
//!
//! One GET, one fully-buffered response, no pagination. The feed must arrive
//! in a single response; non-2xx statuses and malformed bodies propagate as
//! errors with no retry.

use std::time::Duration;

use tracing::debug;

use crate::model::Feed;
use crate::Result;

/// Build the blocking HTTP client used for the run.
///
/// The request timeout is disabled: a stalled server stalls the run rather
/// than aborting it.
pub fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()?)
}

/// Fetch the full feed from `url` and parse it.
pub fn fetch_feed(client: &reqwest::blocking::Client, url: &str) -> Result<Feed> {
    debug!("requesting {}", url);
    let response = client.get(url).send()?.error_for_status()?;
    let feed = response.json::<Feed>()?;
    debug!("feed contains {} organizations", feed.list.len());
    Ok(feed)
}
