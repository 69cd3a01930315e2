//! **Wikipedia adapter**: MediaWiki Action API client
//!
//! [`WikipediaClient`] implements both
//! [`SearchProvider`](wikiask_application::SearchProvider) and
//! [`SummaryProvider`](wikiask_application::SummaryProvider).
//!
//! # Requests
//!
//! | Operation | API call |
//! |-----------|----------|
//! | search | `action=query&list=search&srsearch=..&srlimit=..` |
//! | summary | `action=query&prop=extracts|pageprops&exsentences=..&ppprop=disambiguation` |
//! | disambiguation options | `action=parse&prop=wikitext`: first link of each list item |
//!
//! All requests use `format=json&formatversion=2` and share one
//! `reqwest::Client` (timeout and User-Agent from `[wikipedia]` config).

mod client;
mod error;
mod types;

pub use client::{WikipediaClient, extract_disambiguation_options};
pub use error::WikipediaError;
