//! Glossary document adapters
//!
//! Implement [`GlossarySource`] for the document formats a glossary can be
//! kept in:
//!
//! | Adapter | Extension | Pages |
//! |---------|-----------|-------|
//! | [`PdfGlossarySource`] | `.pdf` | one per PDF page (lopdf) |
//! | [`TextGlossarySource`] | anything else | the whole file as one page |

mod pdf;
mod text;

pub use pdf::PdfGlossarySource;
pub use text::TextGlossarySource;

use std::path::Path;
use wikiask_application::GlossarySource;

/// Pick the adapter for `path` by its extension.
pub fn open_glossary_source(path: impl AsRef<Path>) -> Box<dyn GlossarySource> {
    let path = path.as_ref();
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Box::new(PdfGlossarySource::new(path))
    } else {
        Box::new(TextGlossarySource::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pdf_extension_selects_pdf_adapter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ABBREVIATIONS.PDF");
        std::fs::write(&path, "CPU: central processing unit").unwrap();

        // a text file with a .pdf name must go through the PDF parser and fail
        let source = open_glossary_source(&path);
        assert!(source.extract_pages().is_err());
    }

    #[test]
    fn test_other_extension_selects_text_adapter() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "CPU: central processing unit").unwrap();

        let source = open_glossary_source(file.path());
        let pages = source.extract_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("CPU: central processing unit"));
    }
}
