//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is resolved.

use wikiask_domain::Answer;

/// Callback for progress updates during answer resolution
///
/// Implementations live in the presentation layer (spinner, plain log...).
pub trait ResolveProgressNotifier: Send + Sync {
    /// Called before each search request. `fallback` is true for the retry
    /// with the unexpanded question.
    fn on_search(&self, query: &str, fallback: bool);

    /// Called before the summary of the top candidate is fetched
    fn on_summary_fetch(&self, title: &str);

    /// Called once with the final answer
    fn on_resolved(&self, _answer: &Answer) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoResolveProgress;

impl ResolveProgressNotifier for NoResolveProgress {
    fn on_search(&self, _query: &str, _fallback: bool) {}
    fn on_summary_fetch(&self, _title: &str) {}
}
