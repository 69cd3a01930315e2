//! PDF glossary source
//!
//! Extracts page text with lopdf, in ascending page order.

use lopdf::Document;
use std::path::PathBuf;
use tracing::debug;
use wikiask_application::GlossarySource;
use wikiask_domain::GlossaryError;

/// Glossary kept in a PDF document
pub struct PdfGlossarySource {
    path: PathBuf,
}

impl PdfGlossarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_error(&self, message: impl Into<String>) -> GlossaryError {
        GlossaryError::ParseFailed {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }
}

impl GlossarySource for PdfGlossarySource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn extract_pages(&self) -> Result<Vec<String>, GlossaryError> {
        if !self.path.exists() {
            return Err(GlossaryError::SourceMissing(self.location()));
        }

        let doc = Document::load(&self.path)
            .map_err(|e| self.parse_error(format!("Failed to load PDF: {}", e)))?;

        let pages = doc.get_pages();
        debug!(page_count = pages.len(), "Extracting text from PDF");

        pages
            .keys()
            .map(|&page_num| {
                doc.extract_text(&[page_num]).map_err(|e| {
                    self.parse_error(format!("Failed to extract text from page {}: {}", page_num, e))
                })
            })
            .collect()
    }
}
