//! Search provider port
//!
//! Defines the interface for finding candidate page titles.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a search request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Full-text search over encyclopedia page titles
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return at most `limit` titles in provider relevance order.
    ///
    /// No match is an empty vector, not an error.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, SearchError>;
}
