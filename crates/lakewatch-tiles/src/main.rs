//! `maploader`: bundle offline map tiles for one configured place.
//!
//! Loads the config, resolves the place to its minimum-zoom tile, and walks
//! the quad-tree down to the maximum zoom, downloading the vector and
//! satellite layer for every tile not already on disk.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use lakewatch_tiles::{tile_count, Result, TileCoord, TileError, TileFetcher, TilesConfig};

#[derive(Debug, Parser)]
#[command(name = "maploader", about = "Download a quad-tree of map tiles for a configured place")]
struct Args {
    /// Path to the config file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("maploader: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = TilesConfig::load(&args.config)?;
    if config.logging.console {
        lakewatch_common::init_console(&config.logging.level)?;
    } else {
        let file = config.logging.filename.as_ref().ok_or(TileError::MissingLogFile)?;
        lakewatch_common::init_file(&config.logging.level, file)?;
    }

    info!("starting");

    let place = config.place()?;
    let minzoom = config.location.minzoom;
    let maxzoom = config.location.maxzoom;
    let start = TileCoord::from_lat_lon(place.latitude, place.longitude, minzoom);
    info!(
        "covering {} ({}, {}) from zoom {} to {}: {} tiles per layer, starting at ({}, {})",
        config.location.name,
        place.latitude,
        place.longitude,
        minzoom,
        maxzoom,
        tile_count(minzoom, maxzoom),
        start.x,
        start.y
    );

    let fetcher = TileFetcher::new(&config)?;
    fetcher.download_pyramid(start, maxzoom)?;

    info!("done");
    Ok(())
}
