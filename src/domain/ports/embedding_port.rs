use crate::domain::error::DomainError;
use crate::domain::values::embedding_mode::EmbeddingMode;

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single text. The returned dimensionality is provider-defined.
    async fn embed(&self, text: &str, mode: EmbeddingMode) -> Result<Vec<f32>, DomainError>;
    fn name(&self) -> &str;
}
