//! Domain error types

use thiserror::Error;

/// Errors raised while reading a glossary source document.
///
/// These never escape the glossary loader: both variants degrade to an
/// empty glossary plus a single warning notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlossaryError {
    #[error("Abbreviations document not found at '{0}'")]
    SourceMissing(String),

    #[error("Error loading abbreviations from '{path}': {message}")]
    ParseFailed { path: String, message: String },
}

impl GlossaryError {
    /// Check if this error means the document does not exist
    pub fn is_missing(&self) -> bool {
        matches!(self, GlossaryError::SourceMissing(_))
    }
}
