//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod glossary;
mod lookup;
mod output;
mod repl;
mod wikipedia;

pub use glossary::{DEFAULT_GLOSSARY_PATH, FileGlossaryConfig};
pub use lookup::FileLookupConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use wikipedia::FileWikipediaConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("wikipedia.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("wikipedia.language cannot be empty")]
    EmptyLanguage,

    #[error("lookup.{0} must be at least 1")]
    ZeroLimit(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Abbreviation glossary source
    pub glossary: FileGlossaryConfig,
    /// Wikipedia API client settings
    pub wikipedia: FileWikipediaConfig,
    /// Search/summary request sizes
    pub lookup: FileLookupConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if self.wikipedia.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.wikipedia.language.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLanguage);
        }

        self.lookup.validate()
    }
}
