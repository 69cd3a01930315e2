//! Application layer for wiki-ask
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LookupParams;
pub use ports::{
    glossary_source::GlossarySource,
    notifier::{GlossaryNotifier, NoGlossaryNotifier},
    progress::{NoResolveProgress, ResolveProgressNotifier},
    search_provider::{SearchError, SearchProvider},
    summary_provider::{SummaryError, SummaryProvider},
    transcript_exporter::{ExportError, TranscriptExporter},
};
pub use use_cases::load_glossary::LoadGlossaryUseCase;
pub use use_cases::resolve_answer::ResolveAnswerUseCase;
