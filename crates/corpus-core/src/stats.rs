//! Word and character statistics for the knowledge base

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use shared_types::{CountSummary, FileStats, FolderStats, TextStats};

use crate::error::{CorpusError, FileFailure};
use crate::walker::{discover_files, relative_to, DiscoveryOptions};

/// Folder label for files directly under the root
pub const ROOT_FOLDER: &str = ".";

/// CJK ideographs, CJK symbols and punctuation, half/full-width forms
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3000}'..='\u{303f}' | '\u{ff00}'..='\u{ffef}')
}

/// Line terminators, `\r` included, never count as characters
pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        cjk_chars: text.chars().filter(|c| is_cjk(*c)).count(),
        total_chars: text
            .chars()
            .filter(|c| !matches!(c, ' ' | '\n' | '\r' | '\t'))
            .count(),
        words: text.split_whitespace().count(),
        lines: text.lines().count(),
        size: text.len(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountOutcome {
    pub summary: CountSummary,
    pub failures: Vec<FileFailure>,
}

/// Folder label of a root-relative path
pub fn folder_of(relative: &Path) -> String {
    match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ROOT_FOLDER.to_string(),
    }
}

/// Count every discovered file under `root`, grouped by folder
pub fn count_directory(root: &Path, discovery: &DiscoveryOptions) -> Result<CountOutcome, CorpusError> {
    let files = discover_files(root, discovery)?;
    tracing::info!(root = %root.display(), files = files.len(), "counting words");

    let mut outcome = CountOutcome::default();
    let mut folder_index: HashMap<String, usize> = HashMap::new();

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read file");
                outcome.failures.push(FileFailure::new(path, &e));
                continue;
            }
        };

        let relative = relative_to(path, root);
        let folder = folder_of(relative);
        let stats = text_stats(&content);

        let summary = &mut outcome.summary;
        let slot = *folder_index.entry(folder.clone()).or_insert_with(|| {
            summary.folders.push(FolderStats {
                folder: folder.clone(),
                files: 0,
                stats: TextStats::default(),
            });
            summary.folders.len() - 1
        });
        summary.folders[slot].files += 1;
        summary.folders[slot].stats += stats;
        summary.totals += stats;
        summary.files.push(FileStats {
            path: relative.display().to_string(),
            folder,
            stats,
        });
    }

    outcome
        .summary
        .folders
        .sort_by(|a, b| b.stats.cjk_chars.cmp(&a.stats.cjk_chars));
    Ok(outcome)
}
