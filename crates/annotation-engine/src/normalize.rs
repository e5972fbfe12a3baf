//! Whitespace and punctuation cleanup applied after annotations are deleted

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DASH_SPACING: Regex = Regex::new(r"\s+-\s+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_FULLWIDTH_PUNCT: Regex = Regex::new(r"\s+([，。、；：])").unwrap();
    static ref EMPTY_PARENS: Regex = Regex::new(r"\s+\(\)").unwrap();
}

/// Collapse whitespace around a lone dash to exactly `" - "`
pub fn collapse_dash_spacing(text: &str) -> String {
    DASH_SPACING.replace_all(text, " - ").into_owned()
}

/// Collapse every whitespace run, newlines included, to a single space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Drop whitespace in front of full-width comma, period, enumeration comma,
/// semicolon and colon
pub fn trim_space_before_fullwidth_punct(text: &str) -> String {
    SPACE_BEFORE_FULLWIDTH_PUNCT
        .replace_all(text, "$1")
        .into_owned()
}

/// Drop `()` left behind by a deletion, together with the whitespace before it
pub fn remove_empty_parens(text: &str) -> String {
    EMPTY_PARENS.replace_all(text, "").into_owned()
}

/// Cleanup for remove-all: dash spacing, whitespace collapse, punctuation
pub fn normalize_remove_all(text: &str) -> String {
    let text = collapse_dash_spacing(text);
    let text = collapse_whitespace(&text);
    trim_space_before_fullwidth_punct(&text)
}

/// Cleanup for selective removal: dash spacing, empty parentheses
pub fn normalize_selective(text: &str) -> String {
    let text = collapse_dash_spacing(text);
    remove_empty_parens(&text)
}
