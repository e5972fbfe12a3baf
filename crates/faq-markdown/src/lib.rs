//! FAQ Markdown - converts the knowledge base's FAQ JSON into Markdown

pub mod error;
pub mod model;
pub mod render;

use std::fs;
use std::path::Path;

pub use error::FaqError;
pub use model::{FaqCategory, FaqDocument, FaqEntry};
pub use render::{render_markdown, FaqLabels};

/// Counts reported after a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub categories: usize,
    pub questions: usize,
}

/// Read `input`, render it and write the Markdown to `output`
pub fn convert_file(
    input: &Path,
    output: &Path,
    labels: &FaqLabels,
) -> Result<ConversionSummary, FaqError> {
    if !input.exists() {
        return Err(FaqError::InputNotFound(input.to_path_buf()));
    }

    let json = fs::read_to_string(input)?;
    let doc = FaqDocument::from_json(&json)?;
    let markdown = render_markdown(&doc, labels)?;
    fs::write(output, markdown)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        categories = doc.categories.len(),
        "converted FAQ"
    );

    Ok(ConversionSummary {
        categories: doc.categories.len(),
        questions: doc.question_count(),
    })
}
