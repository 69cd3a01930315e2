//! Session entities

use crate::answer::Answer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question/answer round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: Answer,
    pub asked_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
            asked_at: Utc::now(),
        }
    }
}

/// Append-only history for the current interaction window.
///
/// Owned by the calling shell. [`ChatSession::reset`] starts a new session.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    entries: Vec<HistoryEntry>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round trip and return the stored entry
    pub fn record(&mut self, question: impl Into<String>, answer: Answer) -> &HistoryEntry {
        self.entries.push(HistoryEntry::new(question, answer));
        &self.entries[self.entries.len() - 1]
    }

    /// Clear the history, regardless of its length
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Entries in call order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_call_order() {
        let mut session = ChatSession::new();
        for i in 0..4 {
            session.record(format!("q{}", i), Answer::summary(format!("a{}", i)));
        }

        assert_eq!(session.len(), 4);
        let questions: Vec<&str> = session.entries().iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["q0", "q1", "q2", "q3"]);
        assert_eq!(session.entries()[2].answer, Answer::summary("a2"));
    }

    #[test]
    fn test_record_returns_new_entry() {
        let mut session = ChatSession::new();
        let entry = session.record("What is a CPU?", Answer::empty_input());
        assert_eq!(entry.question, "What is a CPU?");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = ChatSession::new();
        session.record("a", Answer::empty_input());
        session.record("b", Answer::empty_input());
        session.reset();
        assert!(session.is_empty());

        session.reset();
        assert!(session.is_empty());
    }
}
