//! Domain layer for wiki-ask
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Glossary
//!
//! An immutable mapping from upper-cased abbreviation to its expansion,
//! parsed from `KEY: expansion` lines of a source document.
//!
//! ## Expansion
//!
//! Questions are rewritten token by token, replacing known abbreviations
//! while keeping surrounding punctuation attached.
//!
//! ## Answer
//!
//! Every question resolves to exactly one [`Answer`]: a summary, a list of
//! disambiguation options, or a typed warning.

pub mod answer;
pub mod config;
pub mod core;
pub mod expansion;
pub mod glossary;
pub mod session;

// Re-export commonly used types
pub use answer::{Answer, WarningKind};
pub use config::OutputFormat;
pub use core::{error::GlossaryError, question::Question};
pub use expansion::{TokenParts, decompose_token, expand};
pub use glossary::{Glossary, parse_glossary_line, parse_glossary_text};
pub use session::{ChatSession, HistoryEntry, TRANSCRIPT_FILE_NAME, render_transcript};
