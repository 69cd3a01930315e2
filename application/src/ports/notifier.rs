//! Glossary notification port
//!
//! The glossary loader never fails; problems are reported once through this
//! side channel instead.

use wikiask_domain::GlossaryError;

/// Receives the one-shot startup diagnostics of the glossary loader
pub trait GlossaryNotifier: Send + Sync {
    /// Called when the source could not be read; an empty glossary is used.
    fn on_glossary_warning(&self, error: &GlossaryError);

    /// Called after a glossary was built from the source.
    fn on_glossary_loaded(&self, _location: &str, _entries: usize) {}
}

/// No-op notifier
pub struct NoGlossaryNotifier;

impl GlossaryNotifier for NoGlossaryNotifier {
    fn on_glossary_warning(&self, _error: &GlossaryError) {}
}
