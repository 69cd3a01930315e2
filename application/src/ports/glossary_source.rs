//! Glossary source port
//!
//! Defines how the glossary loader reads a source document.

use wikiask_domain::GlossaryError;

/// A document that can be read as an ordered list of page texts.
///
/// Implementations live in the infrastructure layer (PDF, plain text).
pub trait GlossarySource: Send + Sync {
    /// Human-readable location of the document (path or URI)
    fn location(&self) -> String;

    /// Extract the text of every page, in document order.
    ///
    /// Pages without extractable text may be returned as empty strings.
    fn extract_pages(&self) -> Result<Vec<String>, GlossaryError>;
}
