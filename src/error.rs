//! Error handling for the internship matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("LLM extraction error: {0}")]
    LlmExtraction(String),

    #[error("Profile store error: {0}")]
    ProfileStore(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for MatcherError {
    fn from(err: anyhow::Error) -> Self {
        MatcherError::Embedding(err.to_string())
    }
}

/// Convert csv errors to our custom error type
impl From<csv::Error> for MatcherError {
    fn from(err: csv::Error) -> Self {
        MatcherError::ProfileStore(err.to_string())
    }
}
