//! Wikipedia API client

use super::error::{Result, WikipediaError};
use super::types::{ApiError, PageResponse, ParseResponse, SearchResponse};
use crate::config::FileWikipediaConfig;
use async_trait::async_trait;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;
use wikiask_application::{SearchError, SearchProvider, SummaryError, SummaryProvider};

static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").expect("wiki link pattern is valid"));

/// Link namespaces that never name an article
const NON_ARTICLE_NAMESPACES: [&str; 10] = [
    "category",
    "file",
    "help",
    "image",
    "portal",
    "special",
    "template",
    "wikipedia",
    "wikt",
    "wiktionary",
];

/// What a page lookup found
#[derive(Debug, PartialEq, Eq)]
enum PageOutcome {
    Extract(String),
    /// Disambiguation page, with its canonical title
    Disambiguation(String),
    Missing,
}

/// Client for the MediaWiki Action API of one Wikipedia edition
pub struct WikipediaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Build a client from the `[wikipedia]` config section
    pub fn from_config(config: &FileWikipediaConfig) -> Result<Self> {
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikipediaError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Full-text search, returning at most `limit` titles in relevance order
    pub async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let limit = limit.to_string();
        let response: SearchResponse = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
            ])
            .await?;

        let titles = titles_from_search(response)?;
        debug!("Search '{}' returned {} titles", query, titles.len());
        Ok(titles)
    }

    async fn fetch_page(&self, title: &str, sentences: usize) -> Result<PageOutcome> {
        let sentences = sentences.to_string();
        let response: PageResponse = self
            .get(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("explaintext", "1"),
                ("exsentences", sentences.as_str()),
                ("ppprop", "disambiguation"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;

        outcome_from_page(response)
    }

    /// Article titles listed on a disambiguation page, in page order
    pub async fn disambiguation_options(&self, title: &str) -> Result<Vec<String>> {
        let response: ParseResponse = self
            .get(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "wikitext"),
                ("redirects", "1"),
            ])
            .await?;

        check_api_error(response.error)?;
        let page = response
            .parse
            .ok_or_else(|| WikipediaError::UnexpectedResponse("missing 'parse' object".to_string()))?;

        let options = extract_disambiguation_options(&page.wikitext);
        debug!("'{}' lists {} options", page.title, options.len());
        Ok(options)
    }
}

fn check_api_error(error: Option<ApiError>) -> Result<()> {
    match error {
        Some(ApiError { code, info }) => Err(WikipediaError::Api { code, info }),
        None => Ok(()),
    }
}

fn titles_from_search(response: SearchResponse) -> Result<Vec<String>> {
    check_api_error(response.error)?;
    Ok(response
        .query
        .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
        .unwrap_or_default())
}

fn outcome_from_page(response: PageResponse) -> Result<PageOutcome> {
    check_api_error(response.error)?;
    let page = response
        .query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or_else(|| WikipediaError::UnexpectedResponse("no pages in response".to_string()))?;

    if page.missing || page.invalid {
        return Ok(PageOutcome::Missing);
    }
    if page.is_disambiguation() {
        return Ok(PageOutcome::Disambiguation(page.title));
    }
    Ok(PageOutcome::Extract(page.extract.unwrap_or_default()))
}

/// Collect the first article link of every list item (`* [[Target|label]] ...`).
///
/// Targets are returned without section anchors, with underscores as spaces,
/// duplicates removed and page order kept.
pub fn extract_disambiguation_options(wikitext: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();

    for line in wikitext.lines() {
        if !line.trim_start().starts_with('*') {
            continue;
        }

        let target = WIKI_LINK
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).and_then(|m| link_target(m.as_str())))
            .next();

        if let Some(target) = target
            && !options.contains(&target)
        {
            options.push(target);
        }
    }

    options
}

fn link_target(inner: &str) -> Option<String> {
    let target = inner.split('|').next()?;
    let target = target.split('#').next()?;
    let target = target.trim().trim_start_matches(':').replace('_', " ");

    if let Some((namespace, _)) = target.split_once(':')
        && NON_ARTICLE_NAMESPACES.contains(&namespace.trim().to_lowercase().as_str())
    {
        return None;
    }

    if target.is_empty() { None } else { Some(target) }
}

#[async_trait]
impl SearchProvider for WikipediaClient {
    async fn search(&self, query: &str, limit: usize) -> std::result::Result<Vec<String>, SearchError> {
        Ok(self.search_titles(query, limit).await?)
    }
}

#[async_trait]
impl SummaryProvider for WikipediaClient {
    async fn summarize(
        &self,
        title: &str,
        sentences: usize,
        auto_suggest: bool,
    ) -> std::result::Result<String, SummaryError> {
        let title = if auto_suggest {
            let suggested = self.search_titles(title, 1).await?;
            suggested
                .into_iter()
                .next()
                .ok_or_else(|| SummaryError::PageNotFound(title.to_string()))?
        } else {
            title.to_string()
        };

        match self.fetch_page(&title, sentences).await? {
            PageOutcome::Extract(text) => Ok(text),
            PageOutcome::Missing => Err(SummaryError::PageNotFound(title)),
            PageOutcome::Disambiguation(page_title) => {
                let options = self.disambiguation_options(&page_title).await?;
                Err(SummaryError::Disambiguation {
                    title: page_title,
                    options,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_response(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value(value).unwrap()
    }

    fn page_response(value: serde_json::Value) -> PageResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_titles_from_search_keeps_order() {
        let response = search_response(json!({
            "batchcomplete": true,
            "query": {
                "searchinfo": { "totalhits": 3 },
                "search": [
                    { "ns": 0, "title": "Central processing unit", "pageid": 5218 },
                    { "ns": 0, "title": "Processor (computing)", "pageid": 23015 },
                    { "ns": 0, "title": "CPU cache", "pageid": 1124 }
                ]
            }
        }));

        assert_eq!(
            titles_from_search(response).unwrap(),
            vec!["Central processing unit", "Processor (computing)", "CPU cache"]
        );
    }

    #[test]
    fn test_titles_from_search_empty() {
        let response = search_response(json!({
            "batchcomplete": true,
            "query": { "searchinfo": { "totalhits": 0 }, "search": [] }
        }));
        assert!(titles_from_search(response).unwrap().is_empty());
    }

    #[test]
    fn test_titles_from_search_api_error() {
        let response = search_response(json!({
            "error": { "code": "nosrsearch", "info": "The \"srsearch\" parameter must be set." }
        }));

        let err = titles_from_search(response).unwrap_err();
        assert!(matches!(err, WikipediaError::Api { ref code, .. } if code == "nosrsearch"));
    }

    #[test]
    fn test_outcome_extract() {
        let response = page_response(json!({
            "query": {
                "pages": [{
                    "pageid": 5218,
                    "ns": 0,
                    "title": "Central processing unit",
                    "extract": "A central processing unit (CPU) is the primary processor."
                }]
            }
        }));

        assert_eq!(
            outcome_from_page(response).unwrap(),
            PageOutcome::Extract("A central processing unit (CPU) is the primary processor.".to_string())
        );
    }

    #[test]
    fn test_outcome_disambiguation() {
        let response = page_response(json!({
            "query": {
                "pages": [{
                    "pageid": 22989,
                    "ns": 0,
                    "title": "Paris (disambiguation)",
                    "extract": "Paris is the capital of France.",
                    "pageprops": { "disambiguation": "" }
                }]
            }
        }));

        assert_eq!(
            outcome_from_page(response).unwrap(),
            PageOutcome::Disambiguation("Paris (disambiguation)".to_string())
        );
    }

    #[test]
    fn test_outcome_missing() {
        let response = page_response(json!({
            "query": {
                "pages": [{ "ns": 0, "title": "Zzyzx Qwerty", "missing": true }]
            }
        }));
        assert_eq!(outcome_from_page(response).unwrap(), PageOutcome::Missing);
    }

    #[test]
    fn test_outcome_no_pages_is_error() {
        let response = page_response(json!({ "batchcomplete": true }));
        assert!(matches!(
            outcome_from_page(response),
            Err(WikipediaError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_extract_disambiguation_options() {
        let wikitext = "\
'''Paris''' is the capital of France.

'''Paris''' may also refer to:

== Places ==
* [[Paris, Texas]], a city in the United States
* [[Paris, Ontario|Paris]], a community in Canada
** [[Paris, Texas]] again
* [[Paris_(mythology)#Trojan War|Paris]], a Trojan prince
* [[File:Paris.jpg]] [[Paris, Idaho]]
* plain text item without links
: [[Not a list item]]

== See also ==
* [[wikt:Paris]]
* [[Category:Disambiguation pages]]
";

        assert_eq!(
            extract_disambiguation_options(wikitext),
            vec![
                "Paris, Texas",
                "Paris, Ontario",
                "Paris (mythology)",
                "Paris, Idaho",
            ]
        );
    }

    #[test]
    fn test_extract_disambiguation_options_empty() {
        assert!(extract_disambiguation_options("No list here.").is_empty());
    }

    #[test]
    fn test_client_from_config() {
        let config = FileWikipediaConfig {
            language: "de".to_string(),
            ..Default::default()
        };
        let client = WikipediaClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "https://de.wikipedia.org/w/api.php");
    }
}
