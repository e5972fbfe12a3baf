//! Corpus Core - filesystem side of the knowledge base tools
//!
//! This crate provides:
//! - Markdown file discovery with exclusion markers
//! - The batch driver that applies an annotation filter mode to every file
//! - Word and character statistics grouped by folder

pub mod batch;
pub mod error;
pub mod stats;
pub mod walker;

// Re-export commonly used types
pub use batch::{
    process_markdown, rewrite_file, scan_file, scan_markdown, BatchOptions, BatchOutcome,
    ScanOutcome,
};
pub use error::{CorpusError, FileFailure};
pub use stats::{count_directory, text_stats, CountOutcome, ROOT_FOLDER};
pub use walker::{discover_files, DiscoveryOptions};
