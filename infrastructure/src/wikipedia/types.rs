//! MediaWiki API response types (`formatversion=2`)

use serde::Deserialize;

/// `error` object returned instead of a result
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

// ==================== list=search ====================

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub error: Option<ApiError>,
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

// ==================== prop=extracts|pageprops ====================

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub error: Option<ApiError>,
    pub query: Option<PageQuery>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub extract: Option<String>,
    pub pageprops: Option<PageProps>,
}

impl Page {
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
    }
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    /// Present (as an empty string) on disambiguation pages
    pub disambiguation: Option<serde_json::Value>,
}

// ==================== action=parse ====================

#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    pub error: Option<ApiError>,
    pub parse: Option<ParsedPage>,
}

#[derive(Debug, Deserialize)]
pub struct ParsedPage {
    pub title: String,
    #[serde(default)]
    pub wikitext: String,
}
