use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Scan-only mode cannot rewrite files")]
    ReadOnlyMode,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file that could not be processed; the batch continues past it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, error: &dyn std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: error.to_string(),
        }
    }
}
