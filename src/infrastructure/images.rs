use crate::domain::entities::extraction::LoadedImage;
use crate::domain::error::DomainError;
use crate::domain::ports::image_loader::ImageLoader;
use crate::domain::values::image_source::ImageSource;
use reqwest::Client;
use tracing::debug;

/// Reads local image files and downloads remote ones.
pub struct DefaultImageLoader {
    client: Client,
}

impl DefaultImageLoader {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for DefaultImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ImageLoader for DefaultImageLoader {
    async fn load(&self, source: &ImageSource) -> Result<LoadedImage, DomainError> {
        let bytes = match source {
            ImageSource::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|e| DomainError::io(path, e))?,
            ImageSource::Url(url) => {
                debug!(%url, "downloading image");
                let resp = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| DomainError::Io(format!("{url}: {e}")))?;
                if !resp.status().is_success() {
                    return Err(DomainError::Io(format!("{url}: HTTP {}", resp.status())));
                }
                resp.bytes()
                    .await
                    .map_err(|e| DomainError::Io(format!("{url}: {e}")))?
                    .to_vec()
            }
        };

        Ok(LoadedImage {
            bytes,
            extension: source.extension(),
        })
    }
}
