//! Knowledge base file discovery
//!
//! Walks the root recursively in file-name order and yields files whose
//! extension is selected, skipping any path (relative to the root) that
//! contains an exclusion marker such as `.git`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CorpusError;

/// Which files a walk yields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Extensions without the leading dot, compared case-insensitively
    pub extensions: Vec<String>,
    /// Substrings that exclude a path when found in it
    pub exclude_markers: Vec<String>,
}

impl DiscoveryOptions {
    pub fn new<E, M>(extensions: E, exclude_markers: M) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_markers: exclude_markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Markdown files outside version control and cache directories
    pub fn markdown() -> Self {
        Self::new(["md"], [".git", "__pycache__"])
    }

    /// Markdown files, also skipping editor and package directories
    pub fn word_count() -> Self {
        Self::new(
            ["md"],
            [".git", "__pycache__", ".DS_Store", "node_modules", ".vscode"],
        )
    }

    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
            .unwrap_or(false)
    }

    pub fn is_excluded(&self, relative: &Path) -> bool {
        let path = relative.to_string_lossy();
        self.exclude_markers
            .iter()
            .any(|marker| path.contains(marker.as_str()))
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Collect every matching file under `root`
///
/// Unreadable directories are logged and skipped.
pub fn discover_files(root: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>, CorpusError> {
    if !root.is_dir() {
        return Err(CorpusError::RootNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !options.is_excluded(entry.path().strip_prefix(root).unwrap_or(entry.path()))
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && options.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered files");
    Ok(files)
}

/// Path relative to `root`, falling back to the path itself
pub fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
