//! Plain-text glossary source

use std::io::ErrorKind;
use std::path::PathBuf;
use wikiask_application::GlossarySource;
use wikiask_domain::GlossaryError;

/// Glossary kept in a UTF-8 text file, read as a single page
pub struct TextGlossarySource {
    path: PathBuf,
}

impl TextGlossarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GlossarySource for TextGlossarySource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn extract_pages(&self) -> Result<Vec<String>, GlossaryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(vec![text]),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(GlossaryError::SourceMissing(self.location()))
            }
            Err(e) => Err(GlossaryError::ParseFailed {
                path: self.location(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_whole_file_as_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.txt");
        std::fs::write(&path, "CPU: central processing unit\nRAM: random access memory\n").unwrap();

        let pages = TextGlossarySource::new(&path).extract_pages().unwrap();
        assert_eq!(
            pages,
            vec!["CPU: central processing unit\nRAM: random access memory\n".to_string()]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextGlossarySource::new(dir.path().join("nope.txt"))
            .extract_pages()
            .unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn test_invalid_utf8_is_parse_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = TextGlossarySource::new(&path).extract_pages().unwrap_err();
        assert!(matches!(err, GlossaryError::ParseFailed { .. }));
    }
}
