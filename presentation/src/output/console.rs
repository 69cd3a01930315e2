//! Console output formatter for answers

use colored::Colorize;
use serde_json::json;
use wikiask_domain::{Answer, HistoryEntry, OutputFormat};

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render an answer in the requested format
    pub fn render(format: OutputFormat, question: &str, answer: &Answer) -> String {
        match format {
            OutputFormat::Text => Self::format(answer),
            OutputFormat::Json => Self::format_json(question, answer),
        }
    }

    /// Format an answer as text.
    ///
    /// The words are the same ones written to the transcript; only the
    /// colouring differs per answer kind.
    pub fn format(answer: &Answer) -> String {
        match answer {
            Answer::Summary { text } => text.clone(),
            Answer::Disambiguation { .. } => answer.to_text().yellow().to_string(),
            Answer::Warning { message, .. } => {
                format!("{} {}", "!".yellow().bold(), message.yellow())
            }
        }
    }

    /// Format as JSON
    pub fn format_json(question: &str, answer: &Answer) -> String {
        let value = json!({
            "question": question,
            "answer": answer,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the session history, oldest first
    pub fn format_history(entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return "No questions asked yet.".dimmed().to_string();
        }

        let mut output = String::new();
        for (i, entry) in entries.iter().enumerate() {
            output.push_str(&format!(
                "{} {} {}\n",
                format!("[{}]", i + 1).dimmed(),
                "Q:".cyan().bold(),
                entry.question
            ));
            output.push_str(&format!(
                "    {} {}\n",
                "A:".green().bold(),
                Self::indent_continuation(&entry.answer.to_text(), "       ")
            ));
        }
        output
    }

    /// Indent every line after the first
    fn indent_continuation(text: &str, prefix: &str) -> String {
        text.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.to_string()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikiask_domain::ChatSession;

    #[test]
    fn test_summary_is_plain_text() {
        let answer = Answer::summary("Rust is a programming language.");
        assert_eq!(
            ConsoleFormatter::format(&answer),
            "Rust is a programming language."
        );
    }

    #[test]
    fn test_warning_keeps_message() {
        let answer = Answer::no_results("zzyzx");
        let text = ConsoleFormatter::format(&answer);
        assert!(text.contains("No results found for 'zzyzx'. Try rephrasing."));
    }

    #[test]
    fn test_disambiguation_lists_options() {
        let answer = Answer::disambiguation(vec![
            "Paris, France".to_string(),
            "Paris, Texas".to_string(),
        ]);
        let text = ConsoleFormatter::format(&answer);
        assert!(text.contains("Ambiguous topic. Try one of these: Paris, France, Paris, Texas"));
    }

    #[test]
    fn test_json_output() {
        let output = ConsoleFormatter::format_json("What is a CPU?", &Answer::summary("A processor."));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["question"], "What is a CPU?");
        assert_eq!(value["answer"]["kind"], "summary");
        assert_eq!(value["answer"]["text"], "A processor.");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let answer = Answer::empty_input();
        let json = ConsoleFormatter::render(OutputFormat::Json, "", &answer);
        assert!(json.contains("\"empty_input\""));

        let text = ConsoleFormatter::render(OutputFormat::Text, "", &answer);
        assert!(text.contains("Please enter a question."));
    }

    #[test]
    fn test_history_numbers_entries_in_order() {
        let mut session = ChatSession::new();
        session.record("first", Answer::summary("one"));
        session.record("second", Answer::summary("two\nlines"));

        let output = ConsoleFormatter::format_history(session.entries());
        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < second);
        assert!(output.contains("[1]"));
        assert!(output.contains("[2]"));
        assert!(output.contains("       lines"));
    }

    #[test]
    fn test_history_empty() {
        assert!(ConsoleFormatter::format_history(&[]).contains("No questions asked yet."));
    }
}
