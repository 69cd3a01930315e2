//! Session transcript export

mod transcript;

pub use transcript::FileTranscriptExporter;
