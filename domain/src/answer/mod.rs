//! Answer value object
//!
//! Every question resolves to exactly one [`Answer`]. Failures are not
//! errors at this level: they are [`Answer::Warning`] values tagged with a
//! [`WarningKind`] so callers can branch on the kind instead of the text.

use serde::{Deserialize, Serialize};

/// Number of search candidates requested per query
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Number of sentences requested for a summary
pub const SUMMARY_SENTENCES: usize = 5;

/// Maximum disambiguation options surfaced to the user
pub const MAX_DISAMBIGUATION_OPTIONS: usize = 5;

/// Why a question could not be answered with a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Blank or whitespace-only question
    EmptyInput,
    /// Neither the expanded nor the original question matched anything
    NoResults,
    /// A candidate existed but its summary could not be retrieved
    FetchFailed,
    /// Any other failure; the message carries the cause
    Unexpected,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::EmptyInput => "empty_input",
            WarningKind::NoResults => "no_results",
            WarningKind::FetchFailed => "fetch_failed",
            WarningKind::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of resolving a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    /// Provider-derived summary text
    Summary { text: String },
    /// The top hit is ambiguous; candidate titles in provider order
    Disambiguation { options: Vec<String> },
    /// User-facing warning
    Warning { warning: WarningKind, message: String },
}

impl Answer {
    pub fn summary(text: impl Into<String>) -> Self {
        Answer::Summary { text: text.into() }
    }

    /// Build a disambiguation answer, keeping at most
    /// [`MAX_DISAMBIGUATION_OPTIONS`] options.
    pub fn disambiguation(options: Vec<String>) -> Self {
        Self::disambiguation_capped(options, MAX_DISAMBIGUATION_OPTIONS)
    }

    /// Build a disambiguation answer keeping at most `max` options.
    pub fn disambiguation_capped(mut options: Vec<String>, max: usize) -> Self {
        options.truncate(max);
        Answer::Disambiguation { options }
    }

    pub fn empty_input() -> Self {
        Answer::Warning {
            warning: WarningKind::EmptyInput,
            message: "Please enter a question.".to_string(),
        }
    }

    pub fn no_results(question: &str) -> Self {
        Answer::Warning {
            warning: WarningKind::NoResults,
            message: format!("No results found for '{}'. Try rephrasing.", question),
        }
    }

    pub fn fetch_failed(question: &str) -> Self {
        Answer::Warning {
            warning: WarningKind::FetchFailed,
            message: format!("Could not fetch a page for '{}'.", question),
        }
    }

    pub fn unexpected(cause: impl std::fmt::Display) -> Self {
        Answer::Warning {
            warning: WarningKind::Unexpected,
            message: format!("Unexpected error: {}", cause),
        }
    }

    /// The warning kind, if this answer is a warning
    pub fn warning_kind(&self) -> Option<WarningKind> {
        match self {
            Answer::Warning { warning, .. } => Some(*warning),
            _ => None,
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Answer::Summary { .. })
    }

    /// Render the answer as the single line of text shown to the user
    /// and written to the transcript.
    pub fn to_text(&self) -> String {
        match self {
            Answer::Summary { text } => text.clone(),
            Answer::Disambiguation { options } => {
                format!("Ambiguous topic. Try one of these: {}", options.join(", "))
            }
            Answer::Warning { message, .. } => message.clone(),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
