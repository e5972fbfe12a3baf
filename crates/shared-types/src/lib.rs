pub mod types;

pub use types::{
    AnnotationOccurrence, CountSummary, FileAnnotations, FileStats, FolderStats, ScanSummary,
    TextStats,
};
