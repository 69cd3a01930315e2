//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod glossary_source;
pub mod notifier;
pub mod progress;
pub mod search_provider;
pub mod summary_provider;
pub mod transcript_exporter;
