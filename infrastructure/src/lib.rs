//! Infrastructure layer for wiki-ask
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;
pub mod glossary;
pub mod wikipedia;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGlossaryConfig, FileLookupConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileWikipediaConfig,
};
pub use export::FileTranscriptExporter;
pub use glossary::{PdfGlossarySource, TextGlossarySource, open_glossary_source};
pub use wikipedia::{WikipediaClient, WikipediaError};
