use crate::domain::error::DomainError;
use crate::domain::similarity_index::check_k;
use serde::{Deserialize, Serialize};

/// One ranked passage for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub passage_index: usize,
    pub category: Option<String>,
    /// Dot product of the query and passage vectors.
    pub score: f64,
    pub text: String,
}

/// A query together with every passage ranked against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub dimension: usize,
    pub results: Vec<SimilarityResult>,
}

impl QueryResult {
    /// The `k` best results, or all of them when fewer exist.
    pub fn top_k(&self, k: usize) -> Result<&[SimilarityResult], DomainError> {
        check_k(k)?;
        Ok(&self.results[..k.min(self.results.len())])
    }
}
