//! Configuration file loading for wiki-ask
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WIKIASK_*` environment variables (`WIKIASK_WIKIPEDIA__LANGUAGE=de`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./wikiask.toml` or `./.wikiask.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wiki-ask/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_GLOSSARY_PATH, FileConfig, FileGlossaryConfig,
    FileLookupConfig, FileOutputConfig, FileOutputFormat, FileReplConfig, FileWikipediaConfig,
};
pub use loader::ConfigLoader;
