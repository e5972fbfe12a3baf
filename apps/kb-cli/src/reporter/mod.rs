//! Report formatting for the CLI commands
//!
//! # Output Formats
//!
//! - **Console**: human-readable sections, one line per modified file
//! - **Json**: pretty-printed JSON for scripting

mod console;
mod json;

use anyhow::Result;
use std::path::Path;

use corpus_core::{BatchOutcome, CountOutcome, ScanOutcome};
use faq_markdown::ConversionSummary;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// Pretty-printed JSON
    Json,
}

/// Reporter for command results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn scan(&self, root: &Path, outcome: &ScanOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format_scan(root, outcome),
            OutputFormat::Json => JsonReporter::format_scan(root, outcome),
        }
    }

    pub fn strip(&self, root: &Path, mode: &str, outcome: &BatchOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format_strip(root, mode, outcome),
            OutputFormat::Json => JsonReporter::format_strip(root, mode, outcome),
        }
    }

    pub fn count(&self, root: &Path, outcome: &CountOutcome, top: usize) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format_count(root, outcome, top),
            OutputFormat::Json => JsonReporter::format_count(root, outcome, top),
        }
    }

    pub fn faq(&self, input: &Path, output: &Path, summary: &ConversionSummary) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format_faq(input, output, summary),
            OutputFormat::Json => JsonReporter::format_faq(input, output, summary),
        }
    }
}
