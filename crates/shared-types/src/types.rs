use std::collections::BTreeSet;

/// One distinct annotation text and every line it appears on
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnnotationOccurrence {
    pub annotation: String, // Full match, e.g. "(CEO)"
    pub lines: Vec<usize>,  // 1-based, in document order
}

impl AnnotationOccurrence {
    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

/// Scan result for a single file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileAnnotations {
    pub path: String,
    pub annotations: Vec<AnnotationOccurrence>, // First-appearance order
    pub total_count: usize,
    pub unique_count: usize,
}

impl FileAnnotations {
    pub fn contains(&self, annotation: &str) -> bool {
        self.annotations.iter().any(|a| a.annotation == annotation)
    }

    /// Annotations ordered by descending line count; ties keep first-appearance order
    pub fn most_frequent(&self, limit: usize) -> Vec<&AnnotationOccurrence> {
        let mut sorted: Vec<&AnnotationOccurrence> = self.annotations.iter().collect();
        sorted.sort_by(|a, b| b.count().cmp(&a.count()));
        sorted.truncate(limit);
        sorted
    }
}

/// Aggregate scan result over a directory
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ScanSummary {
    pub files: Vec<FileAnnotations>,
    pub total_annotations: usize,
    pub unique_annotations: BTreeSet<String>,
}

impl ScanSummary {
    pub fn push(&mut self, file: FileAnnotations) {
        self.total_annotations += file.total_count;
        self.unique_annotations
            .extend(file.annotations.iter().map(|a| a.annotation.clone()));
        self.files.push(file);
    }

    /// Sort files by descending occurrence count (stable)
    pub fn sort_by_count(&mut self) {
        self.files.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    }

    /// Number of files in which the annotation appears
    pub fn file_count(&self, annotation: &str) -> usize {
        self.files.iter().filter(|f| f.contains(annotation)).count()
    }
}

/// Character and word statistics for a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextStats {
    pub cjk_chars: usize,
    pub total_chars: usize, // Excludes spaces, newlines and tabs
    pub words: usize,
    pub lines: usize,
    pub size: usize, // UTF-8 bytes
}

impl std::ops::AddAssign for TextStats {
    fn add_assign(&mut self, other: Self) {
        self.cjk_chars += other.cjk_chars;
        self.total_chars += other.total_chars;
        self.words += other.words;
        self.lines += other.lines;
        self.size += other.size;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileStats {
    pub path: String,
    pub folder: String,
    pub stats: TextStats,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FolderStats {
    pub folder: String,
    pub files: usize,
    pub stats: TextStats,
}

/// Word-count result over a directory
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CountSummary {
    pub files: Vec<FileStats>,
    pub folders: Vec<FolderStats>, // Sorted by descending CJK count
    pub totals: TextStats,
}

impl CountSummary {
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files).sum()
    }

    /// Files with the most CJK characters
    pub fn top_files(&self, limit: usize) -> Vec<&FileStats> {
        let mut sorted: Vec<&FileStats> = self.files.iter().collect();
        sorted.sort_by(|a, b| b.stats.cjk_chars.cmp(&a.stats.cjk_chars));
        sorted.truncate(limit);
        sorted
    }
}
