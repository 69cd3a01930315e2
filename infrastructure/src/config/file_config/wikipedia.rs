//! Wikipedia configuration from TOML (`[wikipedia]` section)

use serde::{Deserialize, Serialize};

/// Raw Wikipedia client configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikipediaConfig {
    /// Wikipedia language edition (subdomain), e.g. "en"
    pub language: String,
    /// Explicit API endpoint; overrides `language` when set
    pub api_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FileWikipediaConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            api_url: None,
            timeout_seconds: 30,
            user_agent: format!("wiki-ask/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FileWikipediaConfig {
    /// The MediaWiki API endpoint to query
    pub fn api_endpoint(&self) -> String {
        match self.api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("https://{}.wikipedia.org/w/api.php", self.language.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_language() {
        let config = FileWikipediaConfig::default();
        assert_eq!(config.api_endpoint(), "https://en.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = FileWikipediaConfig {
            api_url: Some("http://localhost:8080/w/api.php".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_endpoint(), "http://localhost:8080/w/api.php");
    }

    #[test]
    fn test_blank_endpoint_is_ignored() {
        let config = FileWikipediaConfig {
            language: "ja".to_string(),
            api_url: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_endpoint(), "https://ja.wikipedia.org/w/api.php");
    }
}
