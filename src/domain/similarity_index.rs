use crate::domain::entities::passage::Passage;
use crate::domain::entities::similarity_result::SimilarityResult;
use crate::domain::error::DomainError;
use crate::domain::values::vector;
use std::cmp::Ordering;

/// Exhaustive dot-product ranking over a fixed set of passages.
///
/// Vectors are expected to be unit length, so the dot product is the cosine
/// similarity. The index is immutable once built.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    passages: Vec<Passage>,
    dimension: usize,
}

impl SimilarityIndex {
    /// Builds an index. Every vector must share one dimensionality and contain
    /// only finite components.
    pub fn build(passages: Vec<Passage>) -> Result<Self, DomainError> {
        let first = passages
            .first()
            .ok_or_else(|| DomainError::InvalidArgument("cannot build an index from zero passages".into()))?;
        let dimension = first.dimension();

        for passage in &passages {
            if passage.dimension() != dimension {
                return Err(DomainError::DimensionMismatch {
                    expected: dimension,
                    actual: passage.dimension(),
                });
            }
            if !vector::is_finite(&passage.vector) {
                return Err(DomainError::InvalidArgument(format!(
                    "passage {} has non-finite vector components",
                    passage.index
                )));
            }
        }

        Ok(Self { passages, dimension })
    }

    /// Scores every passage against `query` and sorts by score, highest first.
    /// Equal scores keep insertion order.
    pub fn rank(&self, query: &[f32]) -> Result<Vec<SimilarityResult>, DomainError> {
        if query.len() != self.dimension {
            return Err(DomainError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        if !vector::is_finite(query) {
            return Err(DomainError::InvalidArgument(
                "query vector has non-finite components".into(),
            ));
        }

        let mut scored: Vec<(usize, f64)> = self
            .passages
            .iter()
            .enumerate()
            .map(|(pos, p)| (pos, vector::dot(query, &p.vector)))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(i, (pos, score))| {
                let p = &self.passages[pos];
                SimilarityResult {
                    rank: i + 1,
                    passage_index: p.index,
                    category: p.category.clone(),
                    score,
                    text: p.text.clone(),
                }
            })
            .collect())
    }

    pub fn top_k(&self, query: &[f32], k: usize) -> Result<Vec<SimilarityResult>, DomainError> {
        check_k(k)?;
        let mut ranked = self.rank(query)?;
        ranked.truncate(k);
        Ok(ranked)
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// A result count must be at least one.
pub fn check_k(k: usize) -> Result<(), DomainError> {
    if k == 0 {
        return Err(DomainError::InvalidArgument("k must be at least 1".into()));
    }
    Ok(())
}
