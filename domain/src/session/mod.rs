//! Chat session: the caller-owned question/answer history.

pub mod entities;
pub mod transcript;

pub use entities::{ChatSession, HistoryEntry};
pub use transcript::{TRANSCRIPT_FILE_NAME, render_transcript};
