//! Error types for the dashboard SDK

use thiserror::Error;

/// Errors that can occur when using the dashboard SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// Server answered with a non-success status (remote mode)
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Server reported itself unhealthy
    #[error("Server unhealthy: {0}")]
    Unhealthy(String),

    /// Dataset could not be loaded or validated (embedded mode)
    #[error("Dataset error: {0}")]
    DatasetError(#[from] sales_efficiency::DatasetError),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
