//! Progress reporting while a question is resolved

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wikiask_application::{GlossaryNotifier, ResolveProgressNotifier};
use wikiask_domain::{Answer, GlossaryError, core::string::truncate};

/// Longest query shown next to the spinner
const MAX_QUERY_DISPLAY: usize = 60;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn set_message(&self, message: String) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let spinner = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        spinner.set_message(message);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveProgressNotifier for ProgressReporter {
    fn on_search(&self, query: &str, fallback: bool) {
        let query = truncate(query, MAX_QUERY_DISPLAY);
        if fallback {
            self.set_message(format!("Retrying as typed: {}", query.cyan()));
        } else {
            self.set_message(format!("Searching: {}", query.cyan()));
        }
    }

    fn on_summary_fetch(&self, title: &str) {
        self.set_message(format!("Fetching summary: {}", title.cyan()));
    }

    fn on_resolved(&self, _answer: &Answer) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ResolveProgressNotifier for SimpleProgress {
    fn on_search(&self, query: &str, fallback: bool) {
        let label = if fallback { "Retrying as typed" } else { "Searching" };
        eprintln!("{} {}: {}", "->".cyan(), label.bold(), query);
    }

    fn on_summary_fetch(&self, title: &str) {
        eprintln!("{} {}: {}", "->".cyan(), "Fetching summary".bold(), title);
    }
}

/// Prints glossary diagnostics to stderr
pub struct ConsoleGlossaryNotifier {
    quiet: bool,
}

impl ConsoleGlossaryNotifier {
    /// With `quiet`, only warnings are printed.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl GlossaryNotifier for ConsoleGlossaryNotifier {
    fn on_glossary_warning(&self, error: &GlossaryError) {
        eprintln!(
            "{} {} {}",
            "Warning:".yellow().bold(),
            error.to_string().yellow(),
            "(continuing without abbreviation expansion)".dimmed()
        );
    }

    fn on_glossary_loaded(&self, location: &str, entries: usize) {
        if !self.quiet {
            eprintln!(
                "{} {} abbreviations from {}",
                "Loaded".green(),
                entries,
                location
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_search("What is a central processing unit?", false);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_summary_fetch("Central processing unit");
        reporter.on_resolved(&Answer::summary("A processor."));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_resolved_without_search_is_noop() {
        let reporter = ProgressReporter::default();
        reporter.on_resolved(&Answer::empty_input());
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
