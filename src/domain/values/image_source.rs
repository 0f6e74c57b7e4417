use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where an image to extract from lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// Anything starting with `http://` or `https://` is a URL; everything else is a path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            ImageSource::Url(s.to_string())
        } else {
            ImageSource::Path(PathBuf::from(s))
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }

    /// Extension (with leading dot) used when saving a copy of the image.
    ///
    /// URLs fall back to `.jpg` when their path has no extension; local files
    /// without an extension get none.
    pub fn extension(&self) -> String {
        match self {
            ImageSource::Url(url) => {
                let without_query = url.split(['?', '#']).next().unwrap_or(url.as_str());
                let last_segment = without_query.rsplit('/').next().unwrap_or("");
                match Path::new(last_segment).extension().and_then(|e| e.to_str()) {
                    Some(ext) if !ext.is_empty() => format!(".{ext}"),
                    _ => ".jpg".to_string(),
                }
            }
            ImageSource::Path(path) => path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!(".{e}"))
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(p) => write!(f, "{}", p.display()),
            ImageSource::Url(u) => write!(f, "{u}"),
        }
    }
}

impl FromStr for ImageSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Image source must not be empty".to_string());
        }
        Ok(ImageSource::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_detection() {
        assert!(ImageSource::parse("https://example.com/a.png").is_url());
        assert!(ImageSource::parse("http://example.com/a.png").is_url());
        assert!(!ImageSource::parse("data/scan.JPG").is_url());
        assert!(!ImageSource::parse("ftp://example.com/a.png").is_url());
    }

    #[test]
    fn test_url_extension_strips_query() {
        let src = ImageSource::parse("https://cdn.example.com/img/5.jpg?type=w773");
        assert_eq!(src.extension(), ".jpg");

        let src = ImageSource::parse("https://cdn.example.com/img/scan.png#frag");
        assert_eq!(src.extension(), ".png");
    }

    #[test]
    fn test_url_without_extension_defaults_to_jpg() {
        let src = ImageSource::parse("https://cdn.example.com/render?id=3");
        assert_eq!(src.extension(), ".jpg");
    }

    #[test]
    fn test_path_extension() {
        assert_eq!(ImageSource::parse("scans/invoice.JPG").extension(), ".JPG");
        assert_eq!(ImageSource::parse("scans/invoice").extension(), "");
    }

    #[test]
    fn test_empty_source_rejected() {
        assert!("  ".parse::<ImageSource>().is_err());
    }
}
