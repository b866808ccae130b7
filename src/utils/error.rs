use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeMapError {
    #[error("Feed request failed: {0}")]
    FeedError(#[from] reqwest::Error),

    #[error("Feed returned HTTP status {status}")]
    FeedStatusError { status: reqwest::StatusCode },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed feature {id}: {reason}")]
    MalformedFeatureError { id: String, reason: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QuakeMapError>;
