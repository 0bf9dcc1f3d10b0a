use countries_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source answered with status {0}")]
    Status(u16),

    #[error("Source reported an error: {0}")]
    Provider(String),

    #[error("Source payload has no country list")]
    MissingData,

    #[error("Malformed source payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<SourceError> for ApiError {
    fn from(error: SourceError) -> Self {
        ApiError::ImportError(error.to_string())
    }
}
