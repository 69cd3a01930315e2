//! Glossary configuration from TOML (`[glossary]` section)

use serde::{Deserialize, Serialize};

/// Document looked up in the working directory when nothing is configured
pub const DEFAULT_GLOSSARY_PATH: &str = "abbreviations.pdf";

/// Raw glossary configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGlossaryConfig {
    /// Path to the abbreviations document (`.pdf` or plain text)
    pub path: String,
}

impl Default for FileGlossaryConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_GLOSSARY_PATH.to_string(),
        }
    }
}
