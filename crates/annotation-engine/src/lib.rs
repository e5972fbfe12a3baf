//! Annotation Engine - detection and removal of bracketed English annotations
//!
//! Knowledge base documents gloss names and titles with short English
//! annotations, e.g. `王小明(CEO)`. This crate finds them and applies one of
//! four policies:
//!
//! - [`FilterMode::ScanOnly`]: report occurrences per line
//! - [`FilterMode::RemoveAll`]: delete all, collapse whitespace
//! - [`FilterMode::SelectiveRemove`]: keep allow-listed terms, delete the rest
//! - [`FilterMode::PreserveLayout`]: delete all, leave formatting untouched

pub mod allow_list;
pub mod filter;
pub mod normalize;
pub mod patterns;
pub mod scan;

pub use allow_list::AllowList;
pub use filter::{
    remove_all, remove_preserving_layout, selective_remove, FilterMode, FilterOutcome, Rewrite,
};
pub use patterns::{contains_annotation, find_annotations, Annotation, ANNOTATION_PATTERN};
pub use scan::{scan_text, AnnotationReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_title_in_prose() {
        let text = "王小明(CEO)負責營運\n";

        let rewrite = FilterMode::PreserveLayout.rewrite(text).unwrap();
        assert_eq!(rewrite.content, "王小明負責營運\n");

        let FilterOutcome::Report(report) = FilterMode::ScanOnly.apply(text) else {
            panic!("scan-only must produce a report");
        };
        let file = report.into_file("team.md").unwrap();
        assert_eq!(file.total_count, 1);
        assert_eq!(file.annotations[0].annotation, "(CEO)");
        assert_eq!(file.annotations[0].lines, vec![1]);
    }

    #[test]
    fn test_tool_name_survives_selective_mode() {
        let keep: AllowList = ["Google Drive"].into_iter().collect();
        let text = "所有表單請存放於(Google Drive)資料夾";
        let rewrite = FilterMode::SelectiveRemove(keep).rewrite(text).unwrap();
        assert_eq!(rewrite.content, text);
        assert!(!rewrite.changed);
    }
}
