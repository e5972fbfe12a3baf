//! Allow-list of annotations that selective removal must keep

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Legal clause names used in the contract templates
pub const LEGAL_CLAUSE_TERMS: &[&str] = &[
    "Working Hours & Location",
    "Compensation & Payment",
    "Rights & Obligations",
    "Term & Termination",
    "Breach of Contract",
    "Dispute Resolution",
    "Nature & Governing Law",
    "Position & Work Location",
    "Scope of Work",
    "Compensation & Performance Bonus",
    "Compensation Structure",
    "Net Operating Profit",
    "Manager Value Calculation",
    "Bonus Pool & Accumulation & Safety Reserve",
    "Distribution Schedule",
    "Eligibility & Forfeiture",
    "Retention Bonus",
    "Operational KPIs",
    "The Voluntary Clause",
];

/// Contract titles
pub const AGREEMENT_TITLE_TERMS: &[&str] = &[
    "CEO Service Agreement",
    "Store Manager Service Agreement",
    "Photographer Contract Agreement",
    "Trainee Partner Contract Agreement",
    "Makeup Artist Contract Agreement",
];

/// Tool names
pub const TOOL_TERMS: &[&str] = &["Google Drive", "Google Sheet", "Google Form"];

/// Role labels
pub const ROLE_TERMS: &[&str] = &["Role Spec"];

/// Immutable set of inner texts exempt from removal
///
/// Lookups are exact string comparisons against the annotation text with
/// its parentheses stripped. Deserializes from a plain list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    terms: BTreeSet<String>,
}

impl AllowList {
    /// An allow-list that keeps nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// The knowledge base's protected terms: legal clauses, contract titles,
    /// tool names and role labels
    pub fn knowledge_base() -> Self {
        [
            LEGAL_CLAUSE_TERMS,
            AGREEMENT_TITLE_TERMS,
            TOOL_TERMS,
            ROLE_TERMS,
        ]
        .iter()
        .flat_map(|group| group.iter().copied())
        .collect()
    }

    pub fn contains(&self, inner: &str) -> bool {
        self.terms.contains(inner)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_base_list() {
        let list = AllowList::knowledge_base();
        assert_eq!(list.len(), 28);
        assert!(list.contains("Google Drive"));
        assert!(list.contains("Bonus Pool & Accumulation & Safety Reserve"));
        assert!(!list.contains("CEO"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let list: AllowList = ["Google Drive"].into_iter().collect();
        assert!(list.contains("Google Drive"));
        assert!(!list.contains("google drive"));
        assert!(!list.contains("Google Drive "));
        assert!(!list.contains("(Google Drive)"));
    }

    #[test]
    fn test_deserializes_from_string_list() {
        let list: AllowList =
            serde_json::from_str(r#"["Role Spec", "Google Drive", "Role Spec"]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("Role Spec"));
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"["Google Drive","Role Spec"]"#
        );
    }

    #[test]
    fn test_empty_list() {
        assert!(AllowList::empty().is_empty());
        assert!(!AllowList::empty().contains(""));
    }
}
