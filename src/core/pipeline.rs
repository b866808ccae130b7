use crate::core::render;
use crate::core::{ConfigProvider, EarthquakeFeature, FeedSnapshot, MapDocument, Marker, Storage};
use crate::domain::legend::legend_entries;
use crate::domain::model::FeedDocument;
use crate::domain::style::marker_style;
use crate::utils::error::{QuakeMapError, Result};
use chrono::DateTime;
use reqwest::Client;

pub struct QuakeMapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> QuakeMapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> crate::core::Pipeline for QuakeMapPipeline<S, C> {
    async fn extract(&self) -> Result<FeedSnapshot> {
        tracing::debug!("Requesting earthquake feed: {}", self.config.feed_url());
        let response = self.client.get(self.config.feed_url()).send().await?;

        tracing::debug!("Feed response status: {}", response.status());
        if !response.status().is_success() {
            return Err(QuakeMapError::FeedStatusError {
                status: response.status(),
            });
        }

        let document: FeedDocument = response.json().await?;

        let (title, generated) = match document.metadata {
            Some(metadata) => {
                if let Some(count) = metadata.count {
                    tracing::debug!("Feed reports {} events", count);
                }
                let generated = metadata.generated.and_then(DateTime::from_timestamp_millis);
                if let Some(ts) = generated {
                    tracing::debug!("Feed generated at {}", ts);
                }
                (metadata.title, generated)
            }
            None => (None, None),
        };

        // A malformed entry is logged and dropped; its siblings still render.
        let mut features = Vec::with_capacity(document.features.len());
        let mut skipped = 0;
        for raw in document.features {
            match EarthquakeFeature::try_from(raw) {
                Ok(feature) => features.push(feature),
                Err(e) => {
                    tracing::warn!("Skipping feed entry: {}", e);
                    skipped += 1;
                }
            }
        }

        Ok(FeedSnapshot {
            features,
            skipped,
            title,
            generated,
        })
    }

    async fn transform(&self, snapshot: FeedSnapshot) -> Result<MapDocument> {
        let mut markers = Vec::with_capacity(snapshot.features.len());
        for feature in &snapshot.features {
            markers.push(Marker {
                latitude: feature.latitude,
                longitude: feature.longitude,
                style: marker_style(feature),
                popup: format!(
                    "Magnitude: {}<br>Location: {}",
                    feature.magnitude,
                    render::escape_html(&feature.place)
                ),
            });
        }

        Ok(MapDocument {
            view: self.config.map_view(),
            title: snapshot
                .title
                .unwrap_or_else(|| "Earthquake Map".to_string()),
            markers,
            legend: legend_entries(),
        })
    }

    async fn load(&self, document: MapDocument) -> Result<String> {
        let page = render::render_map_page(&document)?;

        tracing::debug!("Writing map page ({} bytes) to storage", page.len());
        self.storage
            .write_file(self.config.output_file(), page.as_bytes())
            .await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        ))
    }
}
