//! Typed configuration for the tile bundler.
//!
//! The YAML file has four fixed sections (`graphicMap`, `satMap`,
//! `location`, `logging`), an optional `download` section, and one section
//! per known place carrying its coordinates. The place sections are captured
//! as a flattened map keyed by place name; `location.name` selects which one
//! a run uses, and doubles as the save directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Result, TileError};

/// Full configuration for one bundling run.
#[derive(Debug, Clone, Deserialize)]
pub struct TilesConfig {
    /// Vector-style map endpoint.
    #[serde(rename = "graphicMap")]
    pub graphic_map: GraphicMapConfig,
    /// Satellite endpoint.
    #[serde(rename = "satMap")]
    pub sat_map: SatMapConfig,
    /// Target place and zoom range.
    pub location: LocationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Download behavior; absent means lenient.
    #[serde(default)]
    pub download: DownloadConfig,
    /// Coordinates per place, keyed by place name.
    #[serde(flatten)]
    pub places: HashMap<String, PlaceConfig>,
}

/// `graphicMap` section: path-style `{z}/{x}/{y}` endpoint with an access
/// token passed as a query parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphicMapConfig {
    /// URL prefix up to and including the trailing slash before `z`.
    #[serde(rename = "uriPrefix")]
    pub uri_prefix: String,
    /// Access token appended as `?access_token=<token>`.
    pub token: String,
}

/// `satMap` section: query-style endpoint; the prefix already carries a
/// query string, so `z`/`x`/`y` are appended with `&`.
#[derive(Debug, Clone, Deserialize)]
pub struct SatMapConfig {
    #[serde(rename = "uriPrefix")]
    pub uri_prefix: String,
}

/// `location` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Place name; selects the coordinate section and names the save
    /// directory.
    pub name: String,
    pub minzoom: u8,
    pub maxzoom: u8,
}

/// A place's coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlaceConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// `logging` section. `filename` is only consulted (and only required) when
/// `console` is false.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub console: bool,
    pub level: String,
    #[serde(default)]
    pub filename: Option<PathBuf>,
}

/// Optional `download` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DownloadConfig {
    /// When true, a non-OK tile response aborts the run instead of being
    /// logged and saved as-is.
    #[serde(default)]
    pub strict: bool,
}

impl TilesConfig {
    /// Load and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Coordinates of the configured place.
    pub fn place(&self) -> Result<PlaceConfig> {
        self.places
            .get(&self.location.name)
            .copied()
            .ok_or_else(|| TileError::UnknownPlace(self.location.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_YAML: &str = r#"
graphicMap:
  uriPrefix: "https://tiles.example.com/styles/outdoor/"
  token: "pk.test-token"
satMap:
  uriPrefix: "https://sat.example.com/tiles?lyrs=s"
location:
  name: seattle
  minzoom: 10
  maxzoom: 12
logging:
  console: true
  level: INFO
seattle:
  latitude: 47.6062
  longitude: -122.3321
portage:
  latitude: 60.7846
  longitude: -148.8337
"#;

    #[test]
    fn test_parse_config() {
        let config: TilesConfig = serde_yaml::from_str(CONFIG_YAML).unwrap();
        assert_eq!(config.graphic_map.token, "pk.test-token");
        assert_eq!(config.location.minzoom, 10);
        assert_eq!(config.location.maxzoom, 12);
        assert!(config.logging.console);
        assert_eq!(config.logging.filename, None);
        assert_eq!(config.places.len(), 2);
        // `download` absent means lenient.
        assert!(!config.download.strict);
    }

    #[test]
    fn test_place_resolution() {
        let config: TilesConfig = serde_yaml::from_str(CONFIG_YAML).unwrap();
        let place = config.place().unwrap();
        assert_eq!(place.latitude, 47.6062);
        assert_eq!(place.longitude, -122.3321);
    }

    #[test]
    fn test_unknown_place_is_an_error() {
        let mut config: TilesConfig = serde_yaml::from_str(CONFIG_YAML).unwrap();
        config.location.name = "atlantis".to_string();
        let err = config.place().unwrap_err();
        assert!(matches!(err, TileError::UnknownPlace(name) if name == "atlantis"));
    }

    #[test]
    fn test_strict_mode_opt_in() {
        let yaml = format!("{CONFIG_YAML}download:\n  strict: true\n");
        let config: TilesConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(config.download.strict);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        // No satMap section.
        let yaml = r#"
graphicMap:
  uriPrefix: "https://tiles.example.com/styles/outdoor/"
  token: "pk.test-token"
location:
  name: seattle
  minzoom: 10
  maxzoom: 12
logging:
  console: true
  level: INFO
"#;
        assert!(serde_yaml::from_str::<TilesConfig>(yaml).is_err());
    }
}
