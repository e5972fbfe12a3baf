//! Console reporter
//!
//! Human-readable reports with section rules and aligned totals.

use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use corpus_core::{BatchOutcome, CountOutcome, FileFailure, ScanOutcome};
use faq_markdown::ConversionSummary;
use shared_types::TextStats;

/// Annotations listed per file
const TOP_ANNOTATIONS_PER_FILE: usize = 10;
/// Line numbers shown per annotation before summarizing
const SAMPLE_LINES: usize = 5;

const RULE: &str =
    "================================================================================";

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format_scan(root: &Path, outcome: &ScanOutcome) -> Result<String> {
        let mut output = String::new();
        let summary = &outcome.summary;

        Self::header(&mut output, "Knowledge Base Annotation Scan")?;
        writeln!(output, "Root: {}", root.display())?;

        Self::section(&mut output, "Summary")?;
        writeln!(output, "Files with annotations:  {}", summary.files.len())?;
        writeln!(output, "Total annotations:       {}", summary.total_annotations)?;
        writeln!(output, "Unique annotations:      {}", summary.unique_annotations.len())?;

        if summary.files.is_empty() {
            writeln!(output)?;
            writeln!(output, "✓ No annotations found")?;
        } else {
            Self::section(&mut output, "Files")?;
            for file in &summary.files {
                writeln!(output)?;
                writeln!(output, "{}", file.path)?;
                writeln!(output, "  Total:  {}", file.total_count)?;
                writeln!(output, "  Unique: {}", file.unique_count)?;

                for occurrence in file.most_frequent(TOP_ANNOTATIONS_PER_FILE) {
                    let mut lines = occurrence
                        .lines
                        .iter()
                        .take(SAMPLE_LINES)
                        .map(|l| l.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    if occurrence.lines.len() > SAMPLE_LINES {
                        write!(lines, " ... ({} total)", occurrence.lines.len())?;
                    }
                    writeln!(output, "  • {}: lines {}", occurrence.annotation, lines)?;
                }
            }

            Self::section(&mut output, "All Annotations")?;
            for (i, annotation) in summary.unique_annotations.iter().enumerate() {
                writeln!(
                    output,
                    "{:3}. {} (in {} files)",
                    i + 1,
                    annotation,
                    summary.file_count(annotation)
                )?;
            }
        }

        Self::failures(&mut output, &outcome.failures)?;
        Self::footer(&mut output)?;
        Ok(output)
    }

    pub fn format_strip(root: &Path, mode: &str, outcome: &BatchOutcome) -> Result<String> {
        let mut output = String::new();

        Self::header(&mut output, &format!("Remove Annotations ({})", mode))?;
        writeln!(output, "Root: {}", root.display())?;
        writeln!(output)?;

        let marker = if outcome.dry_run { "~ Would modify" } else { "✓ Modified" };
        for path in &outcome.modified {
            writeln!(output, "{}: {}", marker, path.display())?;
        }

        writeln!(output)?;
        let verb = if outcome.dry_run { "Would modify" } else { "Modified" };
        writeln!(
            output,
            "{} {} of {} files ({} annotations removed, {} kept)",
            verb,
            outcome.modified.len(),
            outcome.processed(),
            outcome.removed,
            outcome.kept
        )?;

        Self::failures(&mut output, &outcome.failures)?;
        Self::footer(&mut output)?;
        Ok(output)
    }

    pub fn format_count(root: &Path, outcome: &CountOutcome, top: usize) -> Result<String> {
        let mut output = String::new();
        let summary = &outcome.summary;
        let totals = &summary.totals;

        Self::header(&mut output, "Knowledge Base Word Count")?;
        writeln!(output, "Root: {}", root.display())?;

        Self::section(&mut output, "Summary")?;
        writeln!(output, "Files:        {}", format_number(summary.file_count()))?;
        Self::stats_lines(&mut output, totals, "")?;
        writeln!(
            output,
            "Size:         {} bytes ({:.2} KB)",
            format_number(totals.size),
            totals.size as f64 / 1024.0
        )?;

        Self::section(&mut output, "By Folder")?;
        for folder in summary.folders.iter().filter(|f| f.files > 0) {
            writeln!(output)?;
            writeln!(output, "{}", folder.folder)?;
            writeln!(output, "  Files:        {}", format_number(folder.files))?;
            Self::stats_lines(&mut output, &folder.stats, "  ")?;
        }

        Self::section(&mut output, &format!("Top {} Files by CJK Characters", top))?;
        for (i, file) in summary.top_files(top).iter().enumerate() {
            writeln!(output)?;
            writeln!(output, "{}. {}", i + 1, file.path)?;
            writeln!(output, "   CJK chars:   {}", format_number(file.stats.cjk_chars))?;
            writeln!(output, "   Total chars: {}", format_number(file.stats.total_chars))?;
            writeln!(output, "   Lines:       {}", format_number(file.stats.lines))?;
        }

        Self::failures(&mut output, &outcome.failures)?;
        Self::footer(&mut output)?;
        Ok(output)
    }

    pub fn format_faq(input: &Path, output_path: &Path, summary: &ConversionSummary) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "✓ Converted {} -> {}", input.display(), output_path.display())?;
        writeln!(
            output,
            "  {} categories, {} questions",
            summary.categories, summary.questions
        )?;
        Ok(output)
    }

    fn stats_lines(output: &mut String, stats: &TextStats, indent: &str) -> Result<()> {
        writeln!(output, "{}CJK chars:    {}", indent, format_number(stats.cjk_chars))?;
        writeln!(output, "{}Total chars:  {}", indent, format_number(stats.total_chars))?;
        writeln!(output, "{}Words:        {}", indent, format_number(stats.words))?;
        writeln!(output, "{}Lines:        {}", indent, format_number(stats.lines))?;
        Ok(())
    }

    fn failures(output: &mut String, failures: &[FileFailure]) -> Result<()> {
        if failures.is_empty() {
            return Ok(());
        }
        writeln!(output)?;
        writeln!(output, "Failures:")?;
        for failure in failures {
            writeln!(output, "  ✗ {}: {}", failure.path.display(), failure.message)?;
        }
        Ok(())
    }

    fn header(output: &mut String, title: &str) -> Result<()> {
        writeln!(output, "{}", RULE)?;
        writeln!(output, "{}", title)?;
        writeln!(output, "{}", RULE)?;
        Ok(())
    }

    fn section(output: &mut String, title: &str) -> Result<()> {
        writeln!(output)?;
        Self::header(output, title)
    }

    fn footer(output: &mut String) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(output, "Done")?;
        writeln!(output, "{}", RULE)?;
        Ok(())
    }
}

/// Format with thousands separators, e.g. `12,345`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AnnotationOccurrence, FileAnnotations, ScanSummary};
    use std::path::PathBuf;

    fn scan_outcome() -> ScanOutcome {
        let mut summary = ScanSummary::default();
        summary.push(FileAnnotations {
            path: "team.md".to_string(),
            annotations: vec![
                AnnotationOccurrence {
                    annotation: "(CEO)".to_string(),
                    lines: vec![1, 3, 5, 7, 9, 11, 13],
                },
                AnnotationOccurrence {
                    annotation: "(Store Manager)".to_string(),
                    lines: vec![2],
                },
            ],
            total_count: 8,
            unique_count: 2,
        });
        ScanOutcome {
            summary,
            failures: vec![],
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_scan_report_lists_sample_lines() {
        let output = ConsoleReporter::format_scan(Path::new("kb"), &scan_outcome()).unwrap();

        assert!(output.contains("Total annotations:       8"));
        assert!(output.contains("• (CEO): lines 1, 3, 5, 7, 9 ... (7 total)"));
        assert!(output.contains("• (Store Manager): lines 2\n"));
        assert!(output.contains("  1. (CEO) (in 1 files)"));
        assert!(output.contains("  2. (Store Manager) (in 1 files)"));
    }

    #[test]
    fn test_empty_scan_report() {
        let output = ConsoleReporter::format_scan(Path::new("kb"), &ScanOutcome::default()).unwrap();
        assert!(output.contains("No annotations found"));
        assert!(!output.contains("All Annotations"));
    }

    #[test]
    fn test_strip_report() {
        let outcome = BatchOutcome {
            modified: vec![PathBuf::from("team.md")],
            unchanged: 2,
            removed: 3,
            kept: 1,
            failures: vec![FileFailure {
                path: PathBuf::from("broken.md"),
                message: "stream did not contain valid UTF-8".to_string(),
            }],
            dry_run: false,
        };
        let output = ConsoleReporter::format_strip(Path::new("kb"), "selective", &outcome).unwrap();

        assert!(output.contains("✓ Modified: team.md"));
        assert!(output.contains("Modified 1 of 3 files (3 annotations removed, 1 kept)"));
        assert!(output.contains("✗ broken.md: stream did not contain valid UTF-8"));
    }
}
