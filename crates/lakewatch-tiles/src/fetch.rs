//! Tile downloading with a file-existence cache.
//!
//! Each tile is fetched in two layers from two endpoints with different URL
//! shapes (path-style `z/x/y` for the vector layer, query parameters for the
//! satellite layer) and written to a deterministic path under the save
//! directory. A tile whose file already exists is skipped without issuing a
//! request. The `vec/` and `sat/` subdirectories must exist beforehand; the
//! tool never creates them.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::TilesConfig;
use crate::coords::{walk_pyramid, TileCoord};
use crate::{Result, TileError};

/// The two raster layers bundled per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Vector-style map tile (PNG).
    Vector,
    /// Satellite tile (JPEG).
    Satellite,
}

impl Layer {
    /// Subdirectory under the save directory.
    pub const fn dir(&self) -> &'static str {
        match self {
            Layer::Vector => "vec",
            Layer::Satellite => "sat",
        }
    }

    /// File extension for this layer.
    pub const fn extension(&self) -> &'static str {
        match self {
            Layer::Vector => "png",
            Layer::Satellite => "jpg",
        }
    }
}

/// What `download_tile` did for one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The tile was fetched and written.
    Downloaded,
    /// The file already existed; no request was issued.
    AlreadyPresent,
}

/// Counts for one pyramid run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadStats {
    /// Tile files fetched and written.
    pub downloaded: usize,
    /// Tile files skipped because they already existed.
    pub skipped: usize,
}

/// Downloads tiles for both layers into the save directory.
pub struct TileFetcher {
    client: reqwest::blocking::Client,
    vector_uri_prefix: String,
    vector_token: String,
    satellite_uri_prefix: String,
    save_dir: PathBuf,
    strict: bool,
}

impl TileFetcher {
    /// Build a fetcher from the run config.
    ///
    /// The request timeout is disabled: a slow tile server stalls the run
    /// rather than aborting it.
    pub fn new(config: &TilesConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            vector_uri_prefix: config.graphic_map.uri_prefix.clone(),
            vector_token: config.graphic_map.token.clone(),
            satellite_uri_prefix: config.sat_map.uri_prefix.clone(),
            save_dir: PathBuf::from(&config.location.name),
            strict: config.download.strict,
        })
    }

    /// URL for one tile of one layer.
    pub fn tile_url(&self, layer: Layer, coord: TileCoord) -> String {
        match layer {
            Layer::Vector => format!(
                "{}{}/{}/{}?access_token={}",
                self.vector_uri_prefix, coord.z, coord.x, coord.y, self.vector_token
            ),
            Layer::Satellite => format!(
                "{}&z={}&x={}&y={}",
                self.satellite_uri_prefix, coord.z, coord.x, coord.y
            ),
        }
    }

    /// Target file path for one tile of one layer:
    /// `<saveDir>/<vec|sat>/tile_<z>_<x>_<y>.<png|jpg>`.
    pub fn tile_path(&self, layer: Layer, coord: TileCoord) -> PathBuf {
        self.save_dir.join(layer.dir()).join(format!(
            "tile_{}_{}_{}.{}",
            coord.z,
            coord.x,
            coord.y,
            layer.extension()
        ))
    }

    /// Download one tile of one layer, unless its file already exists.
    ///
    /// A non-OK response is handled per the configured mode: lenient logs
    /// the status and writes the body anyway (so an error page can end up
    /// saved as image data; delete the file to force a re-download);
    /// strict returns an error. Transport failures always propagate.
    pub fn download_tile(&self, layer: Layer, coord: TileCoord) -> Result<DownloadOutcome> {
        let path = self.tile_path(layer, coord);
        if path.exists() {
            debug!("file {} already exists, skipping download", path.display());
            return Ok(DownloadOutcome::AlreadyPresent);
        }

        let url = self.tile_url(layer, coord);
        debug!("downloading {} to {}", url, path.display());

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            if self.strict {
                return Err(TileError::TileDownloadFailed {
                    z: coord.z,
                    x: coord.x,
                    y: coord.y,
                    reason: format!("HTTP {status}"),
                });
            }
            error!("tile request {} returned {}", url, status);
        }

        let bytes = response.bytes()?;
        let mut file = File::create(&path)?;
        file.write_all(&bytes)?;

        Ok(DownloadOutcome::Downloaded)
    }

    /// Walk the quad-tree from `start` down to `maxzoom`, downloading both
    /// layers (vector first) for every tile visited.
    pub fn download_pyramid(&self, start: TileCoord, maxzoom: u8) -> Result<DownloadStats> {
        let mut stats = DownloadStats::default();
        walk_pyramid(start, maxzoom, &mut |coord| {
            for layer in [Layer::Vector, Layer::Satellite] {
                match self.download_tile(layer, coord)? {
                    DownloadOutcome::Downloaded => stats.downloaded += 1,
                    DownloadOutcome::AlreadyPresent => stats.skipped += 1,
                }
            }
            Ok::<(), TileError>(())
        })?;
        info!(
            "pyramid complete: {} downloaded, {} already present",
            stats.downloaded, stats.skipped
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DownloadConfig, GraphicMapConfig, LocationConfig, LoggingConfig, SatMapConfig,
    };
    use std::collections::HashMap;

    fn test_config(name: &str) -> TilesConfig {
        TilesConfig {
            graphic_map: GraphicMapConfig {
                uri_prefix: "https://tiles.example.com/styles/outdoor/".to_string(),
                token: "pk.test-token".to_string(),
            },
            sat_map: SatMapConfig {
                uri_prefix: "https://sat.example.com/tiles?lyrs=s".to_string(),
            },
            location: LocationConfig {
                name: name.to_string(),
                minzoom: 10,
                maxzoom: 12,
            },
            logging: LoggingConfig {
                console: true,
                level: "INFO".to_string(),
                filename: None,
            },
            download: DownloadConfig::default(),
            places: HashMap::new(),
        }
    }

    #[test]
    fn test_vector_url_is_path_style() {
        let fetcher = TileFetcher::new(&test_config("seattle")).unwrap();
        let coord = TileCoord { z: 12, x: 656, y: 1430 };
        assert_eq!(
            fetcher.tile_url(Layer::Vector, coord),
            "https://tiles.example.com/styles/outdoor/12/656/1430?access_token=pk.test-token"
        );
    }

    #[test]
    fn test_satellite_url_is_query_style() {
        let fetcher = TileFetcher::new(&test_config("seattle")).unwrap();
        let coord = TileCoord { z: 12, x: 656, y: 1430 };
        assert_eq!(
            fetcher.tile_url(Layer::Satellite, coord),
            "https://sat.example.com/tiles?lyrs=s&z=12&x=656&y=1430"
        );
    }

    #[test]
    fn test_tile_paths_encode_layer_and_coordinates() {
        let fetcher = TileFetcher::new(&test_config("seattle")).unwrap();
        let coord = TileCoord { z: 12, x: 656, y: 1430 };
        assert_eq!(
            fetcher.tile_path(Layer::Vector, coord),
            PathBuf::from("seattle/vec/tile_12_656_1430.png")
        );
        assert_eq!(
            fetcher.tile_path(Layer::Satellite, coord),
            PathBuf::from("seattle/sat/tile_12_656_1430.jpg")
        );
    }
}
