//! Resolve Answer use case.
//!
//! Turns a free-text question into exactly one [`Answer`] in a single pass:
//!
//! 1. Blank question → [`Answer::empty_input`]
//! 2. Expand abbreviations with the [`Glossary`]
//! 3. Search with the expanded question, then with the original one if the
//!    first search found nothing
//! 4. No candidates → [`Answer::no_results`]
//! 5. Summarize the top candidate:
//!    - text → [`Answer::Summary`]
//!    - disambiguation → [`Answer::Disambiguation`] (capped)
//!    - any other failure → [`Answer::fetch_failed`]
//!
//! A failing search request is reported as [`Answer::unexpected`] with its
//! cause. Nothing is retried.

use crate::config::LookupParams;
use crate::ports::progress::{NoResolveProgress, ResolveProgressNotifier};
use crate::ports::search_provider::{SearchError, SearchProvider};
use crate::ports::summary_provider::{SummaryError, SummaryProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};
use wikiask_domain::core::string::truncate;
use wikiask_domain::{Answer, Glossary, Question, expand};

/// Use case for answering a question from the search/summary providers
#[derive(Clone)]
pub struct ResolveAnswerUseCase {
    search: Arc<dyn SearchProvider>,
    summary: Arc<dyn SummaryProvider>,
    params: LookupParams,
}

impl ResolveAnswerUseCase {
    pub fn new(search: Arc<dyn SearchProvider>, summary: Arc<dyn SummaryProvider>) -> Self {
        Self {
            search,
            summary,
            params: LookupParams::default(),
        }
    }

    /// Override the request sizes.
    pub fn with_params(mut self, params: LookupParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &LookupParams {
        &self.params
    }

    /// Resolve with default (no-op) progress
    pub async fn execute(&self, question: &str, glossary: &Glossary) -> Answer {
        self.execute_with_progress(question, glossary, &NoResolveProgress)
            .await
    }

    /// Resolve with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &str,
        glossary: &Glossary,
        progress: &dyn ResolveProgressNotifier,
    ) -> Answer {
        let answer = match Question::try_new(question) {
            None => Answer::empty_input(),
            Some(question) => match self.lookup(&question, glossary, progress).await {
                Ok(answer) => answer,
                Err(e) => {
                    warn!("Search failed for '{}': {}", truncate(question.content(), 100), e);
                    Answer::unexpected(e)
                }
            },
        };

        progress.on_resolved(&answer);
        answer
    }

    async fn lookup(
        &self,
        question: &Question,
        glossary: &Glossary,
        progress: &dyn ResolveProgressNotifier,
    ) -> Result<Answer, SearchError> {
        let original = question.content();
        let expanded = expand(original, glossary);
        info!("Resolving question: {}", truncate(original, 100));
        if expanded != original {
            debug!("Expanded question: {}", expanded);
        }

        progress.on_search(&expanded, false);
        let mut candidates = self.search.search(&expanded, self.params.max_results).await?;

        if candidates.is_empty() {
            debug!("No results for expanded question, retrying with original text");
            progress.on_search(original, true);
            candidates = self.search.search(original, self.params.max_results).await?;
        }

        let Some(title) = candidates.first() else {
            info!("No results for '{}'", truncate(original, 100));
            return Ok(Answer::no_results(original));
        };

        debug!("{} candidates, using top hit '{}'", candidates.len(), title);
        progress.on_summary_fetch(title);

        let answer = match self
            .summary
            .summarize(title, self.params.summary_sentences, self.params.auto_suggest)
            .await
        {
            Ok(text) => Answer::summary(text),
            Err(SummaryError::Disambiguation { options, .. }) => {
                info!("'{}' is ambiguous ({} options)", title, options.len());
                Answer::disambiguation_capped(options, self.params.max_options)
            }
            Err(e) => {
                warn!("Could not fetch summary for '{}': {}", title, e);
                Answer::fetch_failed(original)
            }
        };

        Ok(answer)
    }
}
