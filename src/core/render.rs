use crate::domain::legend::LegendEntry;
use crate::domain::model::MapDocument;
use crate::utils::error::Result;

const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__TITLE__</title>
  <link rel="stylesheet" href="__LEAFLET_CSS__" />
  <style>
    html, body, #map { height: 100%; margin: 0; }
    .info.legend i { width: 12px; height: 12px; display: inline-block; margin-right: 4px; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script src="__LEAFLET_JS__"></script>
  <script>
    var basemap = L.tileLayer("__TILE_URL__", {
      attribution: "__ATTRIBUTION__"
    });

    var map = L.map("map", {
      center: [__CENTER_LAT__, __CENTER_LON__],
      zoom: __ZOOM__,
      layers: [basemap]
    });

    var markers = __MARKERS__;
    markers.forEach(function (m) {
      L.circleMarker([m.latitude, m.longitude], m.style)
        .bindPopup(m.popup)
        .addTo(map);
    });

    var legend = L.control({ position: "bottomright" });
    legend.onAdd = function () {
      var div = L.DomUtil.create("div", "info legend");
      div.style.backgroundColor = "rgba(255, 255, 255, 0.8)";
      div.style.padding = "10px";
      div.style.borderRadius = "5px";
      div.style.boxShadow = "0 0 5px rgba(0, 0, 0, 0.5)";
      div.innerHTML = __LEGEND__;
      return div;
    };
    legend.addTo(map);
  </script>
</body>
</html>
"#;

/// Minimal HTML entity escaping for feed-supplied text embedded in popups
/// and the page title.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn legend_html(entries: &[LegendEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str(&format!(
            "<i style=\"background:{}\"></i> {}<br>",
            entry.color,
            entry.label.replace('\u{2013}', "&ndash;")
        ));
    }
    html
}

/// Embed a value in a <script> block. Closing tags inside JSON strings
/// would terminate the block early, so "</" is broken up.
fn embed_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Emit the whole map page as one self-contained HTML document.
pub fn render_map_page(document: &MapDocument) -> Result<String> {
    let view = document.view;
    Ok(PAGE_TEMPLATE
        .replace("__TITLE__", &escape_html(&document.title))
        .replace("__LEAFLET_CSS__", LEAFLET_CSS)
        .replace("__LEAFLET_JS__", LEAFLET_JS)
        .replace("__TILE_URL__", OSM_TILE_URL)
        .replace("__ATTRIBUTION__", OSM_ATTRIBUTION)
        .replace("__CENTER_LAT__", &view.center_lat.to_string())
        .replace("__CENTER_LON__", &view.center_lon.to_string())
        .replace("__ZOOM__", &view.zoom.to_string())
        .replace("__MARKERS__", &embed_json(&document.markers)?)
        .replace("__LEGEND__", &embed_json(&legend_html(&document.legend))?))
}
