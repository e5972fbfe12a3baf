//! Detection pattern for bracketed English annotations
//!
//! An annotation is a parenthesized gloss such as `(CEO)` or
//! `(Store Manager)` embedded in non-Latin prose. The inner text must start
//! with an uppercase ASCII letter, continue with one or more ASCII letters,
//! whitespace, `&` or `-`, and end with a word character right before `)`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Group 0 is the whole match including parentheses, group 1 the inner text.
    pub static ref ANNOTATION_PATTERN: Regex =
        Regex::new(r"\(([A-Z][a-zA-Z\s&\-]+\w+)\)").unwrap();
}

/// A single annotation match within a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Full match, e.g. `(Store Manager)`
    pub text: String,
    /// Inner text without delimiters, e.g. `Store Manager`
    pub inner: String,
    /// Byte offset of the opening parenthesis
    pub start: usize,
    /// Byte offset just past the closing parenthesis
    pub end: usize,
    /// 1-based line on which the match starts
    pub line: usize,
}

/// Find every annotation in `text`, left to right, non-overlapping
pub fn find_annotations(text: &str) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    let mut line = 1;
    let mut cursor = 0;

    for caps in ANNOTATION_PATTERN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        line += text[cursor..whole.start()].matches('\n').count();
        cursor = whole.start();

        annotations.push(Annotation {
            text: whole.as_str().to_string(),
            inner: inner.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
            line,
        });
    }

    annotations
}

/// Whether `text` contains at least one annotation
pub fn contains_annotation(text: &str) -> bool {
    ANNOTATION_PATTERN.is_match(text)
}
