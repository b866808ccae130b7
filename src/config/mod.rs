pub mod cli;

use crate::core::{ConfigProvider, MapView};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quake-map")]
#[command(about = "Renders recent earthquakes from the USGS feed onto a Leaflet map page")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "quake_map.html")]
    pub output_file: String,

    /// Initial map center, defaults to the contiguous US.
    #[arg(long, default_value = "39.8283")]
    pub center_lat: f64,

    #[arg(long, default_value = "-98.5795")]
    pub center_lon: f64,

    #[arg(long, default_value = "5")]
    pub zoom: u8,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn map_view(&self) -> MapView {
        MapView {
            center_lat: self.center_lat,
            center_lon: self.center_lon,
            zoom: self.zoom,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        validate_range("center_lat", self.center_lat, -90.0, 90.0)?;
        validate_range("center_lon", self.center_lon, -180.0, 180.0)?;
        validate_range("zoom", self.zoom, 0, 19)?;
        Ok(())
    }
}
