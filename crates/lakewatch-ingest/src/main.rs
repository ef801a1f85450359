//! `get-readings`: one batch ingestion run.
//!
//! Loads the config, connects to the store, fetches the feed, and walks it
//! into the three collections. Run-to-completion; any failure is printed to
//! stderr and the process exits nonzero.

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::info;

use lakewatch_ingest::{fetch_feed, http_client, ingest_feed, IngestConfig, MongoStore, Result};

#[derive(Debug, Parser)]
#[command(name = "get-readings", about = "Fetch sensor readings and load them into MongoDB")]
struct Args {
    /// Path to the config file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("get-readings: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = IngestConfig::load(&args.config)?;
    lakewatch_common::init_file(&config.logging.level, &config.logging.file)?;

    info!("starting");

    info!("connecting to MongoDB");
    let store = MongoStore::connect(&config.mongo)?;

    info!("fetching data from remote service");
    let client = http_client()?;
    let feed = fetch_feed(&client, &config.api.uri)?;

    // One timestamp for every reading of this run.
    let fetch_time = Utc::now();

    info!("parsing returned data");
    let report = ingest_feed(&store, &feed, fetch_time)?;

    info!(
        "inserted {} readings ({} organizations, {} sites)",
        report.readings_inserted, report.organizations, report.sites
    );
    info!("done");
    Ok(())
}
