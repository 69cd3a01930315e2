//! Presentation layer for wiki-ask
//!
//! This crate contains the CLI definition, output formatters,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ConsoleGlossaryNotifier, ProgressReporter, SimpleProgress};
