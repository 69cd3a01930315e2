//! Abbreviation glossary.
//!
//! - [`entities::Glossary`]: immutable abbreviation → expansion mapping
//! - [`parsing`]: `KEY: expansion` line parsing

pub mod entities;
pub mod parsing;

pub use entities::Glossary;
pub use parsing::{parse_glossary_line, parse_glossary_text};
