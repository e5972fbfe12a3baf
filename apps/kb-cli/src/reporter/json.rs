//! JSON reporter

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use corpus_core::{BatchOutcome, CountOutcome, FileFailure, ScanOutcome};
use faq_markdown::ConversionSummary;
use shared_types::{CountSummary, FileStats, ScanSummary};

#[derive(Debug, Serialize)]
struct FailureEntry {
    path: String,
    message: String,
}

fn failures(failures: &[FileFailure]) -> Vec<FailureEntry> {
    failures
        .iter()
        .map(|f| FailureEntry {
            path: f.path.display().to_string(),
            message: f.message.clone(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    generated_at: DateTime<Utc>,
    root: String,
    summary: &'a ScanSummary,
    failures: Vec<FailureEntry>,
}

#[derive(Debug, Serialize)]
struct StripReport<'a> {
    generated_at: DateTime<Utc>,
    root: String,
    mode: &'a str,
    dry_run: bool,
    modified: Vec<String>,
    unchanged: usize,
    removed: usize,
    kept: usize,
    failures: Vec<FailureEntry>,
}

#[derive(Debug, Serialize)]
struct CountReport<'a> {
    generated_at: DateTime<Utc>,
    root: String,
    summary: &'a CountSummary,
    top_files: Vec<&'a FileStats>,
    failures: Vec<FailureEntry>,
}

#[derive(Debug, Serialize)]
struct FaqReport {
    generated_at: DateTime<Utc>,
    input: String,
    output: String,
    categories: usize,
    questions: usize,
}

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    pub fn format_scan(root: &Path, outcome: &ScanOutcome) -> Result<String> {
        Self::to_json(&ScanReport {
            generated_at: Utc::now(),
            root: root.display().to_string(),
            summary: &outcome.summary,
            failures: failures(&outcome.failures),
        })
    }

    pub fn format_strip(root: &Path, mode: &str, outcome: &BatchOutcome) -> Result<String> {
        Self::to_json(&StripReport {
            generated_at: Utc::now(),
            root: root.display().to_string(),
            mode,
            dry_run: outcome.dry_run,
            modified: outcome
                .modified
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            unchanged: outcome.unchanged,
            removed: outcome.removed,
            kept: outcome.kept,
            failures: failures(&outcome.failures),
        })
    }

    pub fn format_count(root: &Path, outcome: &CountOutcome, top: usize) -> Result<String> {
        Self::to_json(&CountReport {
            generated_at: Utc::now(),
            root: root.display().to_string(),
            summary: &outcome.summary,
            top_files: outcome.summary.top_files(top),
            failures: failures(&outcome.failures),
        })
    }

    pub fn format_faq(input: &Path, output: &Path, summary: &ConversionSummary) -> Result<String> {
        Self::to_json(&FaqReport {
            generated_at: Utc::now(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            categories: summary.categories,
            questions: summary.questions,
        })
    }

    fn to_json<T: Serialize>(report: &T) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    }
}
