use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the provider's two embedding models a text goes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingMode {
    /// Search queries, embedded on demand per query.
    #[default]
    Query,
    /// Documents, embedded once per batch.
    Passage,
}

impl fmt::Display for EmbeddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Passage => write!(f, "passage"),
        }
    }
}

impl FromStr for EmbeddingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "query" | "q" => Ok(Self::Query),
            "passage" | "document" | "doc" => Ok(Self::Passage),
            _ => Err(format!(
                "Invalid embedding mode: '{}'. Use 'query' or 'passage'",
                s
            )),
        }
    }
}
