use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::values::embedding_mode::EmbeddingMode;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info};

/// Embeds a batch of texts with at most `concurrency` calls in flight.
pub struct BatchEmbedder {
    embedder: Arc<dyn EmbeddingProvider>,
    concurrency: usize,
}

impl BatchEmbedder {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, concurrency: usize) -> Self {
        Self {
            embedder,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns one vector per text, in the order of `texts`.
    ///
    /// All-or-nothing: the first failing call aborts the batch, in-flight calls
    /// are dropped and no partial output is returned.
    pub async fn embed_all(&self, texts: &[String], mode: EmbeddingMode) -> Result<Vec<Vec<f32>>, DomainError> {
        info!(
            count = texts.len(),
            %mode,
            provider = self.embedder.name(),
            concurrency = self.concurrency,
            "embedding batch"
        );

        let embedder = &self.embedder;
        let tagged: Vec<(usize, Vec<f32>)> = stream::iter(texts.iter().enumerate())
            .map(|(i, text)| async move {
                match embedder.embed(text, mode).await {
                    Ok(v) => {
                        debug!(index = i, dimension = v.len(), "embedded");
                        Ok((i, v))
                    }
                    Err(e) => Err(DomainError::EmbeddingProvider(format!(
                        "item {} of {}: {}",
                        i + 1,
                        texts.len(),
                        e
                    ))),
                }
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        // Completion order is arbitrary; restore input order by tag.
        let mut slots: Vec<Option<Vec<f32>>> = vec![None; texts.len()];
        for (i, v) in tagged {
            slots[i] = Some(v);
        }
        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| DomainError::EmbeddingProvider(format!("no embedding returned for item {}", i + 1)))
            })
            .collect()
    }
}
