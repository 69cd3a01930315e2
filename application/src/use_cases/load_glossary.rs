//! Load Glossary use case
//!
//! Builds the process-wide [`Glossary`] from a [`GlossarySource`]. Runs once
//! at startup and never fails: an unreadable source yields an empty glossary
//! and a single notification.

use crate::ports::glossary_source::GlossarySource;
use crate::ports::notifier::{GlossaryNotifier, NoGlossaryNotifier};
use std::sync::Arc;
use tracing::{info, warn};
use wikiask_domain::{Glossary, parse_glossary_text};

/// Use case for loading the abbreviation glossary
pub struct LoadGlossaryUseCase {
    notifier: Arc<dyn GlossaryNotifier>,
}

impl Default for LoadGlossaryUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadGlossaryUseCase {
    pub fn new() -> Self {
        Self {
            notifier: Arc::new(NoGlossaryNotifier),
        }
    }

    /// Create with a notifier for startup diagnostics.
    pub fn with_notifier(mut self, notifier: Arc<dyn GlossaryNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Read the source and parse it into a glossary.
    pub fn execute(&self, source: &dyn GlossarySource) -> Glossary {
        let location = source.location();

        match source.extract_pages() {
            Ok(pages) => {
                let glossary = parse_glossary_text(&pages);
                info!(
                    "Loaded {} abbreviations from {} ({} pages)",
                    glossary.len(),
                    location,
                    pages.len()
                );
                self.notifier.on_glossary_loaded(&location, glossary.len());
                glossary
            }
            Err(e) => {
                warn!("{}. Continuing without abbreviations.", e);
                self.notifier.on_glossary_warning(&e);
                Glossary::empty()
            }
        }
    }
}
