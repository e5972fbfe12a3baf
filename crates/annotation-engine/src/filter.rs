//! The four annotation filter modes
//!
//! Each mode is its own variant so callers pick one policy explicitly and the
//! rules for that policy live in one function.

use std::fmt;

use regex::Captures;

use crate::allow_list::AllowList;
use crate::normalize::{normalize_remove_all, normalize_selective};
use crate::patterns::ANNOTATION_PATTERN;
use crate::scan::{scan_text, AnnotationReport};

/// Transformation policy applied to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMode {
    /// Report annotations and their line numbers; never modify text
    ScanOnly,
    /// Delete every annotation, then collapse whitespace document-wide
    RemoveAll,
    /// Keep annotations whose inner text is allow-listed, delete the rest
    SelectiveRemove(AllowList),
    /// Delete every annotation line by line, leaving all spacing intact
    PreserveLayout,
}

/// Result of a transforming mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub changed: bool,
    pub removed: usize,
    pub kept: usize,
}

/// Result of applying a [`FilterMode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    Report(AnnotationReport),
    Rewrite(Rewrite),
}

impl FilterMode {
    pub fn name(&self) -> &'static str {
        match self {
            FilterMode::ScanOnly => "scan",
            FilterMode::RemoveAll => "all",
            FilterMode::SelectiveRemove(_) => "selective",
            FilterMode::PreserveLayout => "preserve-layout",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, FilterMode::ScanOnly)
    }

    pub fn apply(&self, text: &str) -> FilterOutcome {
        match self {
            FilterMode::ScanOnly => FilterOutcome::Report(scan_text(text)),
            FilterMode::RemoveAll => FilterOutcome::Rewrite(remove_all(text)),
            FilterMode::SelectiveRemove(keep) => {
                FilterOutcome::Rewrite(selective_remove(text, keep))
            }
            FilterMode::PreserveLayout => FilterOutcome::Rewrite(remove_preserving_layout(text)),
        }
    }

    /// Apply a transforming mode; `None` for scan-only
    pub fn rewrite(&self, text: &str) -> Option<Rewrite> {
        match self.apply(text) {
            FilterOutcome::Rewrite(rewrite) => Some(rewrite),
            FilterOutcome::Report(_) => None,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Delete every annotation and normalize the whole document
///
/// Deletion repeats until no match remains, since removing an inner
/// annotation can close up a new one around it, e.g. `(A(Bcd)Ef)`.
pub fn remove_all(text: &str) -> Rewrite {
    let mut removed = 0;
    let mut current = text.to_string();

    while ANNOTATION_PATTERN.is_match(&current) {
        removed += ANNOTATION_PATTERN.find_iter(&current).count();
        current = ANNOTATION_PATTERN.replace_all(&current, "").into_owned();
    }

    let content = normalize_remove_all(&current);
    Rewrite {
        changed: content != text,
        content,
        removed,
        kept: 0,
    }
}

/// Delete annotations not in `keep`, leave allow-listed ones verbatim
pub fn selective_remove(text: &str, keep: &AllowList) -> Rewrite {
    let mut removed = 0;
    let mut kept = 0;

    let stripped = ANNOTATION_PATTERN.replace_all(text, |caps: &Captures| {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        if keep.contains(inner) {
            kept += 1;
            caps[0].to_string()
        } else {
            removed += 1;
            String::new()
        }
    });

    let content = normalize_selective(&stripped);
    Rewrite {
        changed: content != text,
        content,
        removed,
        kept,
    }
}

/// Delete every annotation per line without touching anything else
pub fn remove_preserving_layout(text: &str) -> Rewrite {
    let mut removed = 0;
    let mut changed = false;
    let mut content = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let matches = ANNOTATION_PATTERN.find_iter(line).count();
        if matches == 0 {
            content.push_str(line);
            continue;
        }
        removed += matches;
        let new_line = ANNOTATION_PATTERN.replace_all(line, "");
        changed |= new_line != line;
        content.push_str(&new_line);
    }

    Rewrite {
        content,
        changed,
        removed,
        kept: 0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::normalize::collapse_dash_spacing;
    use crate::patterns::{contains_annotation, find_annotations};
    use proptest::prelude::*;

    /// Text mixing CJK prose, annotations and whitespace
    fn document() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[一-龥，。、；：]{1,6}",
                "\\([A-Z][a-zA-Z &\\-]{1,12}[a-z]\\)",
                "\\([a-z0-9 ]{1,6}\\)",
                "[ \t\n-]{1,3}",
                "[()A-Za-z&]{1,4}",
            ],
            0..24,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        /// Property: nothing matching the pattern survives remove-all
        #[test]
        fn remove_all_leaves_no_annotation(text in document()) {
            let rewrite = remove_all(&text);
            prop_assert!(!contains_annotation(&rewrite.content));
        }

        /// Property: remove-all is idempotent
        #[test]
        fn remove_all_is_idempotent(text in document()) {
            let once = remove_all(&text).content;
            let twice = remove_all(&once);
            prop_assert_eq!(&twice.content, &once);
            prop_assert!(!twice.changed);
        }

        /// Property: selective removal keeps exactly the allow-listed matches
        #[test]
        fn selective_keeps_exactly_allow_listed(text in document(), pick in 0usize..4) {
            let found = find_annotations(&text);
            let keep: AllowList = found
                .iter()
                .enumerate()
                .filter(|(i, _)| i % 4 == pick)
                .map(|(_, a)| a.inner.clone())
                .collect();

            let expected_kept = found.iter().filter(|a| keep.contains(&a.inner)).count();
            let rewrite = selective_remove(&text, &keep);

            prop_assert_eq!(rewrite.kept, expected_kept);
            prop_assert_eq!(rewrite.kept + rewrite.removed, found.len());
            // Dash spacing inside a kept annotation is still normalized
            for annotation in found.iter().filter(|a| keep.contains(&a.inner)) {
                prop_assert!(rewrite.content.contains(&collapse_dash_spacing(&annotation.text)));
            }
        }

        /// Property: layout mode never touches line terminators
        #[test]
        fn preserve_layout_keeps_line_count(text in document()) {
            let rewrite = remove_preserving_layout(&text);
            prop_assert_eq!(
                rewrite.content.matches('\n').count(),
                text.matches('\n').count()
            );
        }

        /// Property: no mode panics on arbitrary input
        #[test]
        fn modes_never_panic(text in "\\PC*") {
            let _ = FilterMode::ScanOnly.apply(&text);
            let _ = remove_all(&text);
            let _ = selective_remove(&text, &AllowList::knowledge_base());
            let _ = remove_preserving_layout(&text);
        }
    }
}
