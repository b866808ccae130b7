use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::legend::LegendEntry;
use crate::domain::style::MarkerStyle;
use crate::utils::error::QuakeMapError;

/// Raw GeoJSON FeatureCollection as returned by the USGS summary feed.
/// Fields are deliberately loose; conversion into [`EarthquakeFeature`]
/// happens once at the ingestion boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    pub metadata: Option<FeedMetadata>,
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedMetadata {
    pub title: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub generated: Option<i64>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    pub id: Option<String>,
    #[serde(default)]
    pub properties: RawProperties,
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProperties {
    pub mag: Option<f64>,
    pub place: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    /// GeoJSON point order: [longitude, latitude, depth_km].
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// One earthquake event, validated and typed. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub magnitude: f64,
    pub depth_km: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub place: String,
}

impl TryFrom<RawFeature> for EarthquakeFeature {
    type Error = QuakeMapError;

    fn try_from(raw: RawFeature) -> Result<Self, Self::Error> {
        let id = raw.id.unwrap_or_else(|| "<no id>".to_string());

        let magnitude =
            raw.properties
                .mag
                .ok_or_else(|| QuakeMapError::MalformedFeatureError {
                    id: id.clone(),
                    reason: "missing or null properties.mag".to_string(),
                })?;

        let geometry = raw
            .geometry
            .ok_or_else(|| QuakeMapError::MalformedFeatureError {
                id: id.clone(),
                reason: "missing geometry".to_string(),
            })?;

        if geometry.coordinates.len() < 3 {
            return Err(QuakeMapError::MalformedFeatureError {
                id,
                reason: format!(
                    "expected 3 coordinates [lon, lat, depth], got {}",
                    geometry.coordinates.len()
                ),
            });
        }

        Ok(Self {
            magnitude,
            depth_km: geometry.coordinates[2],
            longitude: geometry.coordinates[0],
            latitude: geometry.coordinates[1],
            place: raw
                .properties
                .place
                .unwrap_or_else(|| "Unknown location".to_string()),
        })
    }
}

/// Output of the extract stage: converted features plus feed metadata.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub features: Vec<EarthquakeFeature>,
    /// Count of feed entries dropped during conversion.
    pub skipped: usize,
    pub title: Option<String>,
    pub generated: Option<DateTime<Utc>>,
}

/// Initial map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

/// One styled, popup-bound circle marker ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub style: MarkerStyle,
    pub popup: String,
}

/// Output of the transform stage: everything the renderer needs to emit
/// one self-contained map page.
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub view: MapView,
    pub title: String,
    pub markers: Vec<Marker>,
    pub legend: Vec<LegendEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(mag: Option<f64>, coordinates: Option<Vec<f64>>) -> RawFeature {
        RawFeature {
            id: Some("test1".to_string()),
            properties: RawProperties {
                mag,
                place: Some("10km NE of Somewhere".to_string()),
            },
            geometry: coordinates.map(|coordinates| RawGeometry { coordinates }),
        }
    }

    #[test]
    fn converts_well_formed_feature() {
        let feature =
            EarthquakeFeature::try_from(raw(Some(2.5), Some(vec![-120.1, 36.2, 5.0]))).unwrap();

        assert_eq!(feature.magnitude, 2.5);
        assert_eq!(feature.depth_km, 5.0);
        assert_eq!(feature.longitude, -120.1);
        assert_eq!(feature.latitude, 36.2);
        assert_eq!(feature.place, "10km NE of Somewhere");
    }

    #[test]
    fn rejects_missing_magnitude() {
        let err = EarthquakeFeature::try_from(raw(None, Some(vec![0.0, 0.0, 10.0]))).unwrap_err();
        assert!(err.to_string().contains("properties.mag"));
    }

    #[test]
    fn rejects_missing_geometry() {
        let err = EarthquakeFeature::try_from(raw(Some(1.0), None)).unwrap_err();
        assert!(err.to_string().contains("geometry"));
    }

    #[test]
    fn rejects_short_coordinate_array() {
        let err = EarthquakeFeature::try_from(raw(Some(1.0), Some(vec![0.0, 0.0]))).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn defaults_missing_place() {
        let mut feature = raw(Some(1.0), Some(vec![0.0, 0.0, 10.0]));
        feature.properties.place = None;
        let converted = EarthquakeFeature::try_from(feature).unwrap();
        assert_eq!(converted.place, "Unknown location");
    }
}
