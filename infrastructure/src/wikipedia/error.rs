//! Error types for the Wikipedia adapter

use thiserror::Error;
use wikiask_application::{SearchError, SummaryError};

/// Result type alias for Wikipedia operations
pub type Result<T> = std::result::Result<T, WikipediaError>;

/// Errors that can occur when talking to the MediaWiki API
#[derive(Error, Debug)]
pub enum WikipediaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Wikipedia returned HTTP {0}")]
    Status(u16),

    #[error("Wikipedia API error ({code}): {info}")]
    Api { code: String, info: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<WikipediaError> for SearchError {
    fn from(e: WikipediaError) -> Self {
        match e {
            WikipediaError::Http(_) | WikipediaError::Status(_) => {
                SearchError::RequestFailed(e.to_string())
            }
            WikipediaError::Api { .. } | WikipediaError::UnexpectedResponse(_) => {
                SearchError::InvalidResponse(e.to_string())
            }
        }
    }
}

impl From<WikipediaError> for SummaryError {
    fn from(e: WikipediaError) -> Self {
        SummaryError::RequestFailed(e.to_string())
    }
}
