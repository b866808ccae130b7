use crate::domain::model::{FeedSnapshot, MapDocument, MapView};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn map_view(&self) -> MapView;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FeedSnapshot>;
    async fn transform(&self, snapshot: FeedSnapshot) -> Result<MapDocument>;
    async fn load(&self, document: MapDocument) -> Result<String>;
}
