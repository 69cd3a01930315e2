//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-blank question
//! - [`error::GlossaryError`]: glossary loading failures

pub mod error;
pub mod question;
pub mod string;
