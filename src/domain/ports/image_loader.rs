use crate::domain::entities::extraction::LoadedImage;
use crate::domain::error::DomainError;
use crate::domain::values::image_source::ImageSource;

#[async_trait::async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, source: &ImageSource) -> Result<LoadedImage, DomainError>;
}
