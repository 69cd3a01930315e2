//! Lookup configuration from TOML (`[lookup]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use wikiask_application::LookupParams;

/// Raw lookup configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// Candidate titles requested per search
    pub max_results: usize,
    /// Sentences per summary
    pub summary_sentences: usize,
    /// Disambiguation options shown
    pub max_options: usize,
    /// Let the summary provider substitute its own best match
    pub auto_suggest: bool,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        let params = LookupParams::default();
        Self {
            max_results: params.max_results,
            summary_sentences: params.summary_sentences,
            max_options: params.max_options,
            auto_suggest: params.auto_suggest,
        }
    }
}

impl FileLookupConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (name, value) in [
            ("max_results", self.max_results),
            ("summary_sentences", self.summary_sentences),
            ("max_options", self.max_options),
        ] {
            if value == 0 {
                return Err(ConfigValidationError::ZeroLimit(name));
            }
        }
        Ok(())
    }

    /// Convert to application-layer parameters
    pub fn to_params(&self) -> LookupParams {
        LookupParams::default()
            .with_max_results(self.max_results)
            .with_summary_sentences(self.summary_sentences)
            .with_max_options(self.max_options)
            .with_auto_suggest(self.auto_suggest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params() {
        assert_eq!(FileLookupConfig::default().to_params(), LookupParams::default());
    }

    #[test]
    fn test_to_params() {
        let config = FileLookupConfig {
            max_results: 2,
            summary_sentences: 3,
            max_options: 1,
            auto_suggest: true,
        };
        let params = config.to_params();
        assert_eq!(params.max_results, 2);
        assert_eq!(params.summary_sentences, 3);
        assert_eq!(params.max_options, 1);
        assert!(params.auto_suggest);
    }
}
