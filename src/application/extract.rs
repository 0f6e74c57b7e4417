use crate::domain::entities::extraction::ExtractionOutcome;
use crate::domain::error::DomainError;
use crate::domain::ports::extraction_port::ExtractionProvider;
use crate::domain::ports::image_loader::ImageLoader;
use crate::domain::values::extraction_mode::ExtractionMode;
use crate::domain::values::image_source::ImageSource;
use crate::infrastructure::dataset::load_schema;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct ExtractUseCase {
    extractor: Arc<dyn ExtractionProvider>,
    images: Arc<dyn ImageLoader>,
}

impl ExtractUseCase {
    pub fn new(extractor: Arc<dyn ExtractionProvider>, images: Arc<dyn ImageLoader>) -> Self {
        Self { extractor, images }
    }

    /// Local inputs are checked before anything goes over the network.
    pub async fn execute(
        &self,
        source: ImageSource,
        schema_path: &Path,
        mode: ExtractionMode,
    ) -> Result<ExtractionOutcome, DomainError> {
        if !schema_path.is_file() {
            return Err(DomainError::Io(format!(
                "schema file not found: {}",
                schema_path.display()
            )));
        }
        if let ImageSource::Path(path) = &source {
            if !path.is_file() {
                return Err(DomainError::Io(format!("image file not found: {}", path.display())));
            }
        }

        let schema = load_schema(schema_path)?;
        let image = self.images.load(&source).await?;
        info!(%source, %mode, bytes = image.bytes.len(), "extracting");

        let data = self.extractor.extract(&image.bytes, &schema, mode).await?;
        Ok(ExtractionOutcome {
            source,
            mode,
            data,
            image,
        })
    }
}
