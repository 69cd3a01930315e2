//! Use cases (application services)

pub mod load_glossary;
pub mod resolve_answer;
