use serde::{Deserialize, Serialize};

/// A passage text and its embedding. Identity is the positional `index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub index: usize,
    pub text: String,
    pub category: Option<String>,
    pub vector: Vec<f32>,
}

impl Passage {
    pub fn new(index: usize, text: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            index,
            text: text.into(),
            category: None,
            vector,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}
