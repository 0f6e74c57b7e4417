use crate::application::embed_batch::BatchEmbedder;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::passage::Passage;
use crate::domain::entities::similarity_result::QueryResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::similarity_index::SimilarityIndex;
use crate::domain::values::embedding_mode::EmbeddingMode;
use crate::domain::values::vector;
use std::sync::Arc;
use tracing::{info, warn};

const UNIT_NORM_TOLERANCE: f64 = 1e-3;

pub struct SearchUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    batch: BatchEmbedder,
}

impl SearchUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, concurrency: usize) -> Self {
        Self {
            batch: BatchEmbedder::new(embedder.clone(), concurrency),
            embedder,
        }
    }

    /// Embeds every passage of the dataset once and indexes the result.
    pub async fn build_index(&self, dataset: &Dataset) -> Result<SimilarityIndex, DomainError> {
        let labeled = dataset.flatten();
        if labeled.is_empty() {
            return Err(DomainError::InvalidArgument("dataset has no passages".into()));
        }

        let texts: Vec<String> = labeled.iter().map(|l| l.text.clone()).collect();
        let vectors = self.batch.embed_all(&texts, EmbeddingMode::Passage).await?;

        let off_norm = vectors
            .iter()
            .filter(|v| !vector::is_unit_norm(v, UNIT_NORM_TOLERANCE))
            .count();
        if off_norm > 0 {
            warn!(
                off_norm,
                total = vectors.len(),
                "passage vectors are not unit length; dot-product scores will not equal cosine similarity"
            );
        }

        let passages = labeled
            .into_iter()
            .zip(vectors)
            .enumerate()
            .map(|(i, (l, v))| Passage::new(i, l.text, v).with_category(l.category))
            .collect();

        let index = SimilarityIndex::build(passages)?;
        info!(passages = index.len(), dimension = index.dimension(), "built similarity index");
        Ok(index)
    }

    pub async fn search(&self, index: &SimilarityIndex, query: &str) -> Result<QueryResult, DomainError> {
        let query_vector = self.embedder.embed(query, EmbeddingMode::Query).await?;
        let results = index.rank(&query_vector)?;
        Ok(QueryResult {
            query: query.to_string(),
            dimension: query_vector.len(),
            results,
        })
    }

    /// Indexes the passages, then ranks them for each query in order.
    pub async fn run(&self, dataset: &Dataset) -> Result<Vec<QueryResult>, DomainError> {
        let index = self.build_index(dataset).await?;
        let mut out = Vec::with_capacity(dataset.queries.len());
        for (i, query) in dataset.queries.iter().enumerate() {
            info!(query = %query, n = i + 1, total = dataset.queries.len(), "ranking query");
            out.push(self.search(&index, query).await?);
        }
        Ok(out)
    }
}
