//! Batch driver: enumerate, read, filter, conditionally write
//!
//! Files are handled one at a time. A failure on one file is logged and
//! recorded, and the batch moves on to the next file.

use std::fs;
use std::path::{Path, PathBuf};

use annotation_engine::{scan_text, FilterMode, Rewrite};
use shared_types::ScanSummary;

use crate::error::{CorpusError, FileFailure};
use crate::walker::{discover_files, relative_to, DiscoveryOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Compute changes without writing them
    pub dry_run: bool,
}

/// Result of running a removal mode over a directory
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Files whose content changed, relative to the root, in traversal order
    pub modified: Vec<PathBuf>,
    pub unchanged: usize,
    pub removed: usize,
    pub kept: usize,
    pub failures: Vec<FileFailure>,
    pub dry_run: bool,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.modified.len() + self.unchanged
    }
}

/// Result of a scan-only pass over a directory
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Files sorted by descending annotation count
    pub summary: ScanSummary,
    pub failures: Vec<FileFailure>,
}

/// Apply a removal mode to one file, writing only if the content changed
///
/// Returns the rewrite so callers can inspect counts. Scan-only mode is
/// rejected; use [`scan_file`] instead.
pub fn rewrite_file(path: &Path, mode: &FilterMode, dry_run: bool) -> Result<Rewrite, CorpusError> {
    let original = fs::read_to_string(path)?;
    let rewrite = mode.rewrite(&original).ok_or(CorpusError::ReadOnlyMode)?;

    if rewrite.changed && !dry_run {
        fs::write(path, &rewrite.content)?;
    }
    Ok(rewrite)
}

/// Run a removal mode over every discovered file under `root`
pub fn process_markdown(
    root: &Path,
    discovery: &DiscoveryOptions,
    mode: &FilterMode,
    options: BatchOptions,
) -> Result<BatchOutcome, CorpusError> {
    if mode.is_read_only() {
        return Err(CorpusError::ReadOnlyMode);
    }

    let files = discover_files(root, discovery)?;
    tracing::info!(
        root = %root.display(),
        files = files.len(),
        mode = %mode,
        dry_run = options.dry_run,
        "removing annotations"
    );

    let mut outcome = BatchOutcome {
        dry_run: options.dry_run,
        ..Default::default()
    };

    for path in &files {
        let relative = relative_to(path, root).to_path_buf();
        match rewrite_file(path, mode, options.dry_run) {
            Ok(rewrite) => {
                outcome.removed += rewrite.removed;
                outcome.kept += rewrite.kept;
                if rewrite.changed {
                    tracing::debug!(path = %relative.display(), removed = rewrite.removed, "modified");
                    outcome.modified.push(relative);
                } else {
                    outcome.unchanged += 1;
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to process file");
                outcome.failures.push(FileFailure::new(path, &e));
            }
        }
    }

    tracing::info!(
        modified = outcome.modified.len(),
        unchanged = outcome.unchanged,
        failed = outcome.failures.len(),
        "removal finished"
    );
    Ok(outcome)
}

/// Scan one file; `None` when it holds no annotations
pub fn scan_file(path: &Path, label: &str) -> Result<Option<shared_types::FileAnnotations>, CorpusError> {
    let content = fs::read_to_string(path)?;
    Ok(scan_text(&content).into_file(label))
}

/// Scan every discovered file under `root` without writing anything
pub fn scan_markdown(root: &Path, discovery: &DiscoveryOptions) -> Result<ScanOutcome, CorpusError> {
    let files = discover_files(root, discovery)?;
    tracing::info!(root = %root.display(), files = files.len(), "scanning for annotations");

    let mut outcome = ScanOutcome::default();
    for path in &files {
        let label = relative_to(path, root).display().to_string();
        match scan_file(path, &label) {
            Ok(Some(file)) => outcome.summary.push(file),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read file");
                outcome.failures.push(FileFailure::new(path, &e));
            }
        }
    }

    outcome.summary.sort_by_count();
    Ok(outcome)
}
