//! Read-only annotation scan of a single document

use std::collections::{BTreeSet, HashMap};

use shared_types::{AnnotationOccurrence, FileAnnotations};

use crate::patterns::{find_annotations, ANNOTATION_PATTERN};

/// Annotation report for one document, not yet tied to a path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Per-line occurrences, in first-appearance order
    pub annotations: Vec<AnnotationOccurrence>,
    /// Matches over the whole document
    pub total_count: usize,
    /// Distinct match texts over the whole document
    pub unique_count: usize,
}

impl AnnotationReport {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Attach a path; documents without annotations produce no record
    pub fn into_file(self, path: impl Into<String>) -> Option<FileAnnotations> {
        if self.is_empty() {
            return None;
        }
        Some(FileAnnotations {
            path: path.into(),
            annotations: self.annotations,
            total_count: self.total_count,
            unique_count: self.unique_count,
        })
    }
}

/// Scan `text` for annotations without modifying it
///
/// Totals are computed over the whole document, so a match spanning a line
/// break counts toward `total_count` even though it is not attributed to any
/// single line. Line attribution matches each line on its own.
pub fn scan_text(text: &str) -> AnnotationReport {
    let whole = find_annotations(text);
    if whole.is_empty() {
        return AnnotationReport::default();
    }

    let unique: BTreeSet<&str> = whole.iter().map(|a| a.text.as_str()).collect();

    let mut annotations: Vec<AnnotationOccurrence> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (line_idx, line) in text.split('\n').enumerate() {
        for found in ANNOTATION_PATTERN.find_iter(line) {
            let slot = *index
                .entry(found.as_str().to_string())
                .or_insert_with(|| {
                    annotations.push(AnnotationOccurrence {
                        annotation: found.as_str().to_string(),
                        lines: Vec::new(),
                    });
                    annotations.len() - 1
                });
            annotations[slot].lines.push(line_idx + 1);
        }
    }

    AnnotationReport {
        annotations,
        total_count: whole.len(),
        unique_count: unique.len(),
    }
}
