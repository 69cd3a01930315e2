//! Slash commands understood by the chat REPL

use std::path::PathBuf;

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// Start a new chat (clears the session history)
    New,
    History,
    /// Write the transcript, optionally to a given file or directory
    Download(Option<PathBuf>),
    Save,
    /// Check that a document exists; the active glossary is kept
    Upload(Option<PathBuf>),
    Glossary,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim()).filter(|s| !s.is_empty())),
            None => (line, None),
        };
        let path = arg.map(PathBuf::from);

        match name {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/new" | "/reset" => ReplCommand::New,
            "/history" => ReplCommand::History,
            "/download" => ReplCommand::Download(path),
            "/save" => ReplCommand::Save,
            "/upload" => ReplCommand::Upload(path),
            "/glossary" => ReplCommand::Glossary,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}
