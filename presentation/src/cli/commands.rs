//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain answer text
    Text,
    /// JSON object tagged by answer kind
    Json,
}

impl From<OutputFormat> for wikiask_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => wikiask_domain::OutputFormat::Text,
            OutputFormat::Json => wikiask_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for wiki-ask
#[derive(Parser, Debug)]
#[command(name = "wiki-ask")]
#[command(author, version, about = "Ask Wikipedia, with your own abbreviations expanded")]
#[command(long_about = r#"
wiki-ask answers a question with a short Wikipedia summary.

Before searching, abbreviations in the question are expanded using a glossary
document of `KEY: expansion` lines (a PDF by default). If the expanded question
finds nothing, the question is searched again as typed.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./wikiask.toml      Project-level config
3. ~/.config/wiki-ask/config.toml   Global config

Example:
  wiki-ask "What is a CPU?"
  wiki-ask --glossary terms.pdf --lang de "Was ist eine CPU?"
  wiki-ask --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Glossary document with `KEY: expansion` lines (.pdf or plain text)
    #[arg(short, long, value_name = "PATH")]
    pub glossary: Option<PathBuf>,

    /// Wikipedia language edition (e.g. en, de, fr)
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_shot() {
        let cli = Cli::parse_from(["wiki-ask", "What is a CPU?"]);
        assert_eq!(cli.question.as_deref(), Some("What is a CPU?"));
        assert!(!cli.chat);
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_chat_with_overrides() {
        let cli = Cli::parse_from([
            "wiki-ask", "--chat", "-g", "terms.txt", "--lang", "de", "-o", "json", "-vv",
        ]);
        assert!(cli.chat);
        assert_eq!(cli.glossary, Some(PathBuf::from("terms.txt")));
        assert_eq!(cli.lang.as_deref(), Some("de"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_output_format_into_domain() {
        assert_eq!(
            wikiask_domain::OutputFormat::from(OutputFormat::Json),
            wikiask_domain::OutputFormat::Json
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
