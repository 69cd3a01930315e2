//! Write a chat transcript to disk

use std::path::{Path, PathBuf};
use tracing::info;
use wikiask_application::{ExportError, TranscriptExporter};
use wikiask_domain::{HistoryEntry, TRANSCRIPT_FILE_NAME, render_transcript};

/// Writes transcripts as plain-text files.
///
/// A directory target receives a `chat_history.txt` inside it.
pub struct FileTranscriptExporter;

impl TranscriptExporter for FileTranscriptExporter {
    fn export(&self, target: &Path, entries: &[HistoryEntry]) -> Result<PathBuf, ExportError> {
        if entries.is_empty() {
            return Err(ExportError::EmptyHistory);
        }

        let path = if target.is_dir() {
            target.join(TRANSCRIPT_FILE_NAME)
        } else {
            target.to_path_buf()
        };

        std::fs::write(&path, render_transcript(entries)).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;

        info!("Wrote {} entries to {}", entries.len(), path.display());
        Ok(path)
    }
}
