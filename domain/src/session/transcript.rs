//! Plain-text transcript of a chat session

use super::entities::HistoryEntry;

/// Default file name offered for a downloaded transcript
pub const TRANSCRIPT_FILE_NAME: &str = "chat_history.txt";

/// Serialize history as `Q: <question>\nA: <answer>\n\n` per entry.
pub fn render_transcript(entries: &[HistoryEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("Q: {}\nA: {}\n\n", entry.question, entry.answer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::session::ChatSession;

    #[test]
    fn test_render_transcript() {
        let mut session = ChatSession::new();
        session.record("What is a CPU?", Answer::summary("A processor."));
        session.record(" ", Answer::empty_input());

        assert_eq!(
            render_transcript(session.entries()),
            "Q: What is a CPU?\nA: A processor.\n\nQ:  \nA: Please enter a question.\n\n"
        );
    }

    #[test]
    fn test_render_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }
}
