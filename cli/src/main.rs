//! CLI entrypoint for wiki-ask
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wikiask_application::{LoadGlossaryUseCase, ResolveAnswerUseCase};
use wikiask_domain::OutputFormat;
use wikiask_infrastructure::{
    ConfigLoader, FileConfig, FileTranscriptExporter, WikipediaClient, open_glossary_source,
};
use wikiask_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleGlossaryNotifier, ProgressReporter, SimpleProgress,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Answers go to stdout; keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting wiki-ask");

    let config = load_config(&cli)?;
    debug!("Effective configuration: {:?}", config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Glossary: loaded once, read-only afterwards
    let source = open_glossary_source(&config.glossary.path);
    let glossary = LoadGlossaryUseCase::new()
        .with_notifier(Arc::new(ConsoleGlossaryNotifier::new(cli.quiet)))
        .execute(source.as_ref());
    let glossary = Arc::new(glossary);

    // Wikipedia serves both the search and the summary port
    let client = Arc::new(
        WikipediaClient::from_config(&config.wikipedia)
            .context("Failed to build the Wikipedia HTTP client")?,
    );
    info!("Using Wikipedia endpoint {}", client.endpoint());

    let use_case =
        ResolveAnswerUseCase::new(client.clone(), client).with_params(config.lookup.to_params());

    let format = cli.output.map(OutputFormat::from).unwrap_or(config.output.format);
    let show_progress = config.repl.show_progress && !cli.quiet;

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, glossary, Arc::new(FileTranscriptExporter))
            .with_glossary_location(source.location())
            .with_progress(show_progress)
            .with_format(format);

        if let Some(path) = config
            .repl
            .history_file
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            repl = repl.with_history_file(Some(PathBuf::from(path)));
        }

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let answer = if !show_progress {
        use_case.execute(&question, &glossary).await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case
            .execute_with_progress(&question, &glossary, &progress)
            .await
    } else {
        use_case
            .execute_with_progress(&question, &glossary, &SimpleProgress)
            .await
    };

    println!("{}", ConsoleFormatter::render(format, &question, &answer));

    Ok(())
}

/// Load the file configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(path) = &cli.glossary {
        config.glossary.path = path.display().to_string();
    }
    if let Some(lang) = &cli.lang {
        config.wikipedia.language = lang.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
