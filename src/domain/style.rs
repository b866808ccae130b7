use serde::Serialize;

use crate::domain::model::EarthquakeFeature;

/// Depth band lower bounds and their display colors, in ascending depth
/// order. The -10 entry is a display floor for the shallowest band, not a
/// real bound; color selection uses a strict greater-than cascade so every
/// depth value matches exactly one band.
pub const DEPTH_BANDS: [(f64, &str); 6] = [
    (-10.0, "#00FF00"),
    (10.0, "#66FF00"),
    (30.0, "#CCFF00"),
    (50.0, "#FFFF00"),
    (70.0, "#FF7F00"),
    (90.0, "#FF0000"),
];

/// Leaflet circleMarker options for one earthquake. Field names serialize
/// to the option names Leaflet expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// Fill color for a depth in km. Boundary values (exactly 90, 70, 50, 30,
/// 10) fall into the lower band; this must stay a strict `>` cascade.
pub fn fill_color(depth_km: f64) -> &'static str {
    if depth_km > 90.0 {
        "#FF0000"
    } else if depth_km > 70.0 {
        "#FF7F00"
    } else if depth_km > 50.0 {
        "#FFFF00"
    } else if depth_km > 30.0 {
        "#CCFF00"
    } else if depth_km > 10.0 {
        "#66FF00"
    } else {
        "#00FF00"
    }
}

/// Marker radius scales linearly with magnitude, no clamping. Negative or
/// zero magnitudes yield non-positive radii, matching the upstream feed map.
pub fn radius(magnitude: f64) -> f64 {
    magnitude * 4.0
}

/// Style descriptor for one feature. Pure and total: any magnitude/depth
/// pair produces a style, never an error.
pub fn marker_style(feature: &EarthquakeFeature) -> MarkerStyle {
    MarkerStyle {
        radius: radius(feature.magnitude),
        fill_color: fill_color(feature.depth_km),
        color: "#000",
        weight: 1,
        opacity: 1.0,
        fill_opacity: 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(magnitude: f64, depth_km: f64) -> EarthquakeFeature {
        EarthquakeFeature {
            magnitude,
            depth_km,
            longitude: 0.0,
            latitude: 0.0,
            place: "test".to_string(),
        }
    }

    #[test]
    fn deep_events_are_red() {
        assert_eq!(fill_color(90.1), "#FF0000");
        assert_eq!(fill_color(700.0), "#FF0000");
    }

    #[test]
    fn boundary_values_fall_into_lower_band() {
        assert_eq!(fill_color(90.0), "#FF7F00");
        assert_eq!(fill_color(70.0), "#FFFF00");
        assert_eq!(fill_color(50.0), "#CCFF00");
        assert_eq!(fill_color(30.0), "#66FF00");
        assert_eq!(fill_color(10.0), "#00FF00");
    }

    #[test]
    fn shallow_and_negative_depths_are_green() {
        assert_eq!(fill_color(5.0), "#00FF00");
        assert_eq!(fill_color(0.0), "#00FF00");
        assert_eq!(fill_color(-3.2), "#00FF00");
    }

    #[test]
    fn nan_depth_takes_default_band() {
        assert_eq!(fill_color(f64::NAN), "#00FF00");
    }

    #[test]
    fn radius_is_exactly_four_times_magnitude() {
        assert_eq!(radius(2.5), 10.0);
        assert_eq!(radius(6.0), 24.0);
        assert_eq!(radius(0.0), 0.0);
        assert_eq!(radius(-1.0), -4.0);
    }

    #[test]
    fn shallow_small_event_style() {
        let style = marker_style(&feature(2.5, 5.0));
        assert_eq!(style.radius, 10.0);
        assert_eq!(style.fill_color, "#00FF00");
        assert_eq!(style.color, "#000");
        assert_eq!(style.weight, 1);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 0.6);
    }

    #[test]
    fn deep_large_event_style() {
        let style = marker_style(&feature(6.0, 95.0));
        assert_eq!(style.radius, 24.0);
        assert_eq!(style.fill_color, "#FF0000");
    }

    #[test]
    fn exact_boundary_event_style() {
        let style = marker_style(&feature(4.0, 70.0));
        assert_eq!(style.radius, 16.0);
        assert_eq!(style.fill_color, "#FFFF00");
    }

    #[test]
    fn bands_are_strictly_increasing() {
        for window in DEPTH_BANDS.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
    }

    #[test]
    fn band_colors_agree_with_cascade() {
        // Just above each lower bound the cascade must return that band's color.
        for (lower, color) in DEPTH_BANDS {
            assert_eq!(fill_color(lower + 0.5), color);
        }
    }

    #[test]
    fn style_serializes_with_leaflet_option_names() {
        let json = serde_json::to_value(marker_style(&feature(2.5, 5.0))).unwrap();
        assert_eq!(json["radius"], 10.0);
        assert_eq!(json["fillColor"], "#00FF00");
        assert_eq!(json["color"], "#000");
        assert_eq!(json["weight"], 1);
        assert_eq!(json["opacity"], 1.0);
        assert_eq!(json["fillOpacity"], 0.6);
    }
}
