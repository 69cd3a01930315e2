//! Lookup parameters: resolver request sizes.
//!
//! [`LookupParams`] groups the static parameters that shape the provider
//! calls made by [`ResolveAnswerUseCase`](crate::use_cases::resolve_answer::ResolveAnswerUseCase).
//! Defaults reproduce the fixed contract: five candidates, five sentences,
//! five disambiguation options, no auto-suggest.

use serde::{Deserialize, Serialize};
use wikiask_domain::answer::{MAX_DISAMBIGUATION_OPTIONS, MAX_SEARCH_RESULTS, SUMMARY_SENTENCES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupParams {
    /// Maximum candidate titles requested from the search provider.
    pub max_results: usize,
    /// Sentences requested for a summary.
    pub summary_sentences: usize,
    /// Maximum disambiguation options surfaced in an answer.
    pub max_options: usize,
    /// Let the summary provider replace the title with its own suggestion.
    pub auto_suggest: bool,
}

impl Default for LookupParams {
    fn default() -> Self {
        Self {
            max_results: MAX_SEARCH_RESULTS,
            summary_sentences: SUMMARY_SENTENCES,
            max_options: MAX_DISAMBIGUATION_OPTIONS,
            auto_suggest: false,
        }
    }
}

impl LookupParams {
    // ==================== Builder Methods ====================

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences;
        self
    }

    pub fn with_max_options(mut self, max: usize) -> Self {
        self.max_options = max;
        self
    }

    pub fn with_auto_suggest(mut self, enabled: bool) -> Self {
        self.auto_suggest = enabled;
        self
    }
}
