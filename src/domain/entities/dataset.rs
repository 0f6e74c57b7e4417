use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Input document for a search run: passages grouped by category, plus queries.
///
/// Category order is kept as written in the file, so flattening is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub passages: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub queries: Vec<String>,
}

/// A passage text with the category it was listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    pub category: String,
    pub text: String,
}

impl Dataset {
    pub fn new(passages: IndexMap<String, Vec<String>>, queries: Vec<String>) -> Self {
        Self { passages, queries }
    }

    /// Passages in category order, then listing order within each category.
    pub fn flatten(&self) -> Vec<LabeledText> {
        self.passages
            .iter()
            .flat_map(|(category, texts)| {
                texts.iter().map(move |text| LabeledText {
                    category: category.clone(),
                    text: text.clone(),
                })
            })
            .collect()
    }

    pub fn passage_count(&self) -> usize {
        self.passages.values().map(Vec::len).sum()
    }
}
