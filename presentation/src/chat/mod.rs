//! Interactive chat module
//!
//! Provides a line-editor based chat interface with a session history.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
