//! Markdown rendering for FAQ documents

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::FaqError;
use crate::model::FaqDocument;

/// Text used for headings and labels in the generated Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqLabels {
    pub title: String,
    pub last_updated_label: String,
    /// Rendered bold, on its own line above the answer
    pub answer_label: String,
    /// Rendered bold, followed by the joined keywords
    pub keywords_label: String,
    pub keyword_separator: String,
    /// Shown when the document has no `last_updated`
    pub missing_date: String,
}

impl Default for FaqLabels {
    fn default() -> Self {
        Self {
            title: "FAQ 問答集".to_string(),
            last_updated_label: "最後更新：".to_string(),
            answer_label: "答案：".to_string(),
            keywords_label: "關鍵字：".to_string(),
            keyword_separator: "、".to_string(),
            missing_date: "N/A".to_string(),
        }
    }
}

/// Render the FAQ as Markdown
///
/// Layout: title, last-updated line and a rule, then one `##` section per
/// category with a numbered `###` heading per question, the answer block,
/// an optional keyword line and a closing rule.
pub fn render_markdown(doc: &FaqDocument, labels: &FaqLabels) -> Result<String, FaqError> {
    let mut out = String::new();

    write!(out, "# {}\n\n", labels.title)?;
    write!(
        out,
        "{}{}\n\n",
        labels.last_updated_label,
        doc.last_updated.as_deref().unwrap_or(&labels.missing_date)
    )?;
    out.push_str("---\n\n");

    for category in &doc.categories {
        write!(out, "## {}\n\n", category.heading())?;

        for (idx, entry) in category.questions.iter().enumerate() {
            write!(out, "### Q{}: {}\n\n", idx + 1, entry.question)?;
            write!(out, "**{}**\n\n{}\n\n", labels.answer_label, entry.answer)?;

            if !entry.keywords.is_empty() {
                write!(
                    out,
                    "**{}** {}\n\n",
                    labels.keywords_label,
                    entry.keywords.join(&labels.keyword_separator)
                )?;
            }

            out.push_str("---\n\n");
        }
    }

    Ok(out)
}
