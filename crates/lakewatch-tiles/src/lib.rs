//! # lakewatch-tiles
//!
//! Offline bundler for slippy-map raster tiles.
//!
//! Given a named place (latitude/longitude) and a zoom range, the tool
//! computes the covering tile at the minimum zoom and walks the quad-tree of
//! descendant tiles down to the maximum zoom, downloading two layers per
//! tile (a vector-style map tile and a satellite tile) from two configured
//! endpoints. Tiles already on disk are skipped without issuing a request;
//! that file-existence check is the tool's only caching mechanism.
//!
//! ## Tile Coordinate System
//!
//! Uses the OpenStreetMap Slippy Map tile naming convention:
//! - `z` is the zoom level
//! - `x` is the column (0 to 2^z - 1, from west to east)
//! - `y` is the row (0 to 2^z - 1, from north to south)
//!
//! The quad-tree of a tile at `(z, x, y)` has children
//! `(z+1, 2x..2x+1, 2y..2y+1)`, so a walk from `minzoom` to `maxzoom` visits
//! `Σ 4^k` tiles (per layer) for `k = 0..(maxzoom - minzoom)`.
//!
//! ## Example
//!
//! ```no_run
//! use lakewatch_tiles::{TileCoord, TileFetcher, TilesConfig};
//!
//! let config = TilesConfig::load("config.yaml".as_ref())?;
//! let place = config.place()?;
//! let start = TileCoord::from_lat_lon(place.latitude, place.longitude, config.location.minzoom);
//! let fetcher = TileFetcher::new(&config)?;
//! let stats = fetcher.download_pyramid(start, config.location.maxzoom)?;
//! println!("{} downloaded, {} already present", stats.downloaded, stats.skipped);
//! # Ok::<(), lakewatch_tiles::TileError>(())
//! ```

mod config;
mod coords;
mod error;
mod fetch;

pub use config::{
    DownloadConfig, GraphicMapConfig, LocationConfig, LoggingConfig, PlaceConfig, SatMapConfig,
    TilesConfig,
};
pub use coords::{tile_count, walk_pyramid, TileCoord};
pub use error::TileError;
pub use fetch::{DownloadOutcome, DownloadStats, Layer, TileFetcher};

/// Result type for tile operations.
pub type Result<T> = std::result::Result<T, TileError>;
