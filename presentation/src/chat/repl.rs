//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::{ConsoleFormatter, ProgressReporter};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;
use wikiask_application::{ResolveAnswerUseCase, TranscriptExporter};
use wikiask_domain::{Answer, ChatSession, Glossary, OutputFormat, TRANSCRIPT_FILE_NAME};

/// Lines kept in the line-editor history
const HISTORY_CAPACITY: usize = 1000;

/// What the loop does after a command
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One line read from the editor
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Command(ReplCommand),
    /// The question exactly as typed
    Question(&'a str),
}

impl<'a> Input<'a> {
    fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Input::Blank
        } else if trimmed.starts_with('/') {
            Input::Command(ReplCommand::parse(trimmed))
        } else {
            Input::Question(line)
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: ResolveAnswerUseCase,
    glossary: Arc<Glossary>,
    glossary_location: String,
    exporter: Arc<dyn TranscriptExporter>,
    session: ChatSession,
    format: OutputFormat,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(
        use_case: ResolveAnswerUseCase,
        glossary: Arc<Glossary>,
        exporter: Arc<dyn TranscriptExporter>,
    ) -> Self {
        Self {
            use_case,
            glossary,
            glossary_location: String::new(),
            exporter,
            session: ChatSession::new(),
            format: OutputFormat::Text,
            show_progress: true,
            history_file: dirs::data_dir().map(|p| p.join("wiki-ask").join("history.txt")),
        }
    }

    /// Set where the glossary was loaded from (shown by `/glossary`)
    pub fn with_glossary_location(mut self, location: impl Into<String>) -> Self {
        self.glossary_location = location.into();
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the line-editor history file; `None` keeps history in memory
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> io::Result<()> {
        let mut editor = self.build_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("wiki-ask".to_string()),
            DefaultPromptSegment::Empty,
        );
        let mut stdout = io::stdout();

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match Input::classify(&line) {
                    Input::Blank => continue,
                    Input::Command(command) => {
                        if self.handle_command(command, &mut stdout)? == Flow::Exit {
                            break;
                        }
                    }
                    Input::Question(question) => {
                        let answer = self.ask(question).await;
                        println!();
                        println!("{}", ConsoleFormatter::render(self.format, question, &answer));
                        println!();
                    }
                },
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Resolve a question and append it to the session history
    pub async fn ask(&mut self, question: &str) -> Answer {
        let answer = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute_with_progress(question, &self.glossary, &progress)
                .await
        } else {
            self.use_case.execute(question, &self.glossary).await
        };

        self.session.record(question, answer.clone());
        answer
    }

    fn build_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = &self.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Line history disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            wiki-ask - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Glossary: {} abbreviations{}",
            self.glossary.len(),
            self.location_suffix()
        );
        println!();
        let _ = write_help(&mut io::stdout());
    }

    fn location_suffix(&self) -> String {
        if self.glossary_location.is_empty() {
            String::new()
        } else {
            format!(" ({})", self.glossary_location)
        }
    }

    /// Handle a slash command, writing its output to `out`
    fn handle_command(&mut self, command: ReplCommand, out: &mut dyn Write) -> io::Result<Flow> {
        match command {
            ReplCommand::Quit => {
                writeln!(out, "Bye!")?;
                return Ok(Flow::Exit);
            }
            ReplCommand::Help => write_help(out)?,
            ReplCommand::New => {
                self.session.reset();
                writeln!(out, "{}", "Started a new chat!".green())?;
            }
            ReplCommand::History => {
                writeln!(out)?;
                writeln!(out, "{}", ConsoleFormatter::format_history(self.session.entries()))?;
            }
            ReplCommand::Download(target) => {
                let target = target.unwrap_or_else(|| PathBuf::from(TRANSCRIPT_FILE_NAME));
                match self.exporter.export(&target, self.session.entries()) {
                    Ok(path) => writeln!(
                        out,
                        "{} {}",
                        "Downloaded chat to".green(),
                        path.display()
                    )?,
                    Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
                }
            }
            ReplCommand::Save => writeln!(out, "{}", "Saved (demo only)".green())?,
            ReplCommand::Upload(None) => writeln!(out, "Usage: /upload <PATH>")?,
            ReplCommand::Upload(Some(path)) => write_upload_status(&path, out)?,
            ReplCommand::Glossary => {
                writeln!(
                    out,
                    "{} abbreviations loaded{}",
                    self.glossary.len(),
                    self.location_suffix()
                )?;
                for (key, value) in self.glossary.sorted_entries() {
                    writeln!(out, "  {}: {}", key.cyan(), value)?;
                }
            }
            ReplCommand::Unknown(cmd) => {
                writeln!(out, "Unknown command: {}", cmd)?;
                writeln!(out, "Type /help for available commands")?;
            }
        }
        Ok(Flow::Continue)
    }
}

fn write_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  /help, /h, /?      - Show this help")?;
    writeln!(out, "  /new               - Start a new chat (clears history)")?;
    writeln!(out, "  /history           - Show questions and answers so far")?;
    writeln!(
        out,
        "  /download [PATH]   - Write the chat to a file (default {})",
        TRANSCRIPT_FILE_NAME
    )?;
    writeln!(out, "  /save              - Save the chat (demo only)")?;
    writeln!(out, "  /upload <PATH>     - Upload a document (the glossary is not replaced)")?;
    writeln!(out, "  /glossary          - Show the loaded abbreviations")?;
    writeln!(out, "  /quit, /exit, /q   - Exit chat")?;
    writeln!(out)
}

/// Upload only acknowledges the file; the active glossary stays as loaded.
fn write_upload_status(path: &Path, out: &mut dyn Write) -> io::Result<()> {
    if path.is_file() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        writeln!(out, "{} {}", "Uploaded:".green(), name)
    } else {
        writeln!(out, "{} {}", "File not found:".yellow(), path.display())
    }
}
