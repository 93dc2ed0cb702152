//! Error handling for the bid matcher application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BidMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Matching error: {0}")]
    Matching(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, BidMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for BidMatcherError {
    fn from(err: anyhow::Error) -> Self {
        BidMatcherError::Matching(err.to_string())
    }
}
