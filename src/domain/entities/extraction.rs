use crate::domain::values::extraction_mode::ExtractionMode;
use crate::domain::values::image_source::ImageSource;
use serde::Serialize;

/// Raw bytes of an input image plus the extension used when saving a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub extension: String,
}

/// Result of a successful extraction call.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub source: ImageSource,
    pub mode: ExtractionMode,
    pub data: serde_json::Value,
    #[serde(skip)]
    pub image: LoadedImage,
}
