//! Transcript export port
//!
//! Defines how a session history is handed out as a downloadable file.

use std::path::{Path, PathBuf};
use thiserror::Error;
use wikiask_domain::HistoryEntry;

/// Errors that can occur while exporting a transcript
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to download: the history is empty")]
    EmptyHistory,

    #[error("Failed to write transcript to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes a session history somewhere the user can pick it up
pub trait TranscriptExporter: Send + Sync {
    /// Export `entries` to `target`, returning the location actually written.
    fn export(&self, target: &Path, entries: &[HistoryEntry]) -> Result<PathBuf, ExportError>;
}
