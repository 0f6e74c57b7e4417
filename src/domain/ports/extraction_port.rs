use crate::domain::error::DomainError;
use crate::domain::values::extraction_mode::ExtractionMode;

#[async_trait::async_trait]
pub trait ExtractionProvider: Send + Sync {
    /// Extracts a JSON object shaped by `schema` from raw image bytes.
    async fn extract(
        &self,
        image: &[u8],
        schema: &serde_json::Value,
        mode: ExtractionMode,
    ) -> Result<serde_json::Value, DomainError>;
}
