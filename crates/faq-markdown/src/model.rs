//! FAQ source document
//!
//! ```json
//! {
//!   "last_updated": "2024-05-01",
//!   "categories": {
//!     "hiring": {
//!       "title": "招募",
//!       "questions": [
//!         { "question": "Q?", "answer": "A.", "keywords": ["k1", "k2"] }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Fields other than `question`, `answer` and `keywords` are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FaqError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategory {
    pub key: String,
    pub title: Option<String>,
    pub questions: Vec<FaqEntry>,
}

impl FaqCategory {
    /// Heading text, falling back to the category key
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqDocument {
    pub last_updated: Option<String>,
    /// In source order
    pub categories: Vec<FaqCategory>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    last_updated: Option<Value>,
    #[serde(default)]
    categories: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawCategory {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    questions: Vec<FaqEntry>,
}

impl FaqDocument {
    pub fn from_json(json: &str) -> Result<Self, FaqError> {
        let raw: RawDocument = serde_json::from_str(json)?;

        let last_updated = match raw.last_updated {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };

        let categories = raw
            .categories
            .into_iter()
            .map(|(key, value)| {
                let body: RawCategory = serde_json::from_value(value)?;
                Ok(FaqCategory {
                    key,
                    title: body.title,
                    questions: body.questions,
                })
            })
            .collect::<Result<Vec<_>, FaqError>>()?;

        Ok(Self {
            last_updated,
            categories,
        })
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }
}
