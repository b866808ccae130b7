use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MapEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching earthquake feed...");
        let snapshot = self.pipeline.extract().await?;
        tracing::info!(
            "Converted {} features ({} skipped)",
            snapshot.features.len(),
            snapshot.skipped
        );

        tracing::info!("Styling markers and building legend...");
        let document = self.pipeline.transform(snapshot).await?;
        tracing::info!(
            "Prepared {} markers and {} legend entries",
            document.markers.len(),
            document.legend.len()
        );

        tracing::info!("Rendering map page...");
        let output_path = self.pipeline.load(document).await?;
        tracing::info!("Map saved to: {}", output_path);

        Ok(output_path)
    }
}
