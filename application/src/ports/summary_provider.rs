//! Summary provider port
//!
//! Defines the interface for fetching a page summary by title.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a summary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// The title refers to several topics; `options` are their titles in
    /// provider order.
    #[error("'{title}' may refer to: {}", options.join(", "))]
    Disambiguation { title: String, options: Vec<String> },

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Summary request failed: {0}")]
    RequestFailed(String),
}

impl SummaryError {
    pub fn is_disambiguation(&self) -> bool {
        matches!(self, SummaryError::Disambiguation { .. })
    }
}

/// Plain-text page summaries
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch the first `sentences` sentences of the page `title`.
    ///
    /// With `auto_suggest` the provider may substitute its own best match
    /// for `title` before fetching.
    async fn summarize(
        &self,
        title: &str,
        sentences: usize,
        auto_suggest: bool,
    ) -> Result<String, SummaryError>;
}
