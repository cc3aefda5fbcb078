use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no candidates")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, GenAiError>;
