pub mod engine;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    EarthquakeFeature, FeedSnapshot, MapDocument, MapView, Marker,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
