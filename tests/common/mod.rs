//! Shared test doubles.
#![allow(dead_code)]

use solarkit::domain::entities::extraction::LoadedImage;
use solarkit::domain::error::DomainError;
use solarkit::domain::ports::embedding_port::EmbeddingProvider;
use solarkit::domain::ports::extraction_port::ExtractionProvider;
use solarkit::domain::ports::image_loader::ImageLoader;
use solarkit::domain::values::embedding_mode::EmbeddingMode;
use solarkit::domain::values::extraction_mode::ExtractionMode;
use solarkit::domain::values::image_source::ImageSource;
use solarkit::infrastructure::storage::fs_writer::FsResultWriter;
use solarkit::SolarKit;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Embedding provider backed by a lookup table.
#[derive(Default)]
pub struct FakeEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    delays: HashMap<String, Duration>,
    fail_on: Option<String>,
    pub calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub modes: Mutex<Vec<EmbeddingMode>>,
}

impl FakeEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, vector: &[f32]) -> Self {
        self.vectors.insert(text.to_string(), vector.to_vec());
        self
    }

    pub fn with_delay(mut self, text: &str, millis: u64) -> Self {
        self.delays.insert(text.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.fail_on = Some(text.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for FakeEmbedder {
    async fn embed(&self, text: &str, mode: EmbeddingMode) -> Result<Vec<f32>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.modes.lock().unwrap().push(mode);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        } else {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_on.as_deref() == Some(text) {
            return Err(DomainError::EmbeddingProvider(format!("provider rejected '{text}'")));
        }
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| DomainError::EmbeddingProvider(format!("no fixture vector for '{text}'")))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Extractor that records its calls and returns a fixed object.
pub struct FakeExtractor {
    pub response: serde_json::Value,
    pub calls: AtomicUsize,
    pub last_schema: Mutex<Option<serde_json::Value>>,
    pub last_mode: Mutex<Option<ExtractionMode>>,
}

impl FakeExtractor {
    pub fn returning(response: serde_json::Value) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_schema: Mutex::new(None),
            last_mode: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ExtractionProvider for FakeExtractor {
    async fn extract(
        &self,
        _image: &[u8],
        schema: &serde_json::Value,
        mode: ExtractionMode,
    ) -> Result<serde_json::Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_schema.lock().unwrap() = Some(schema.clone());
        *self.last_mode.lock().unwrap() = Some(mode);
        Ok(self.response.clone())
    }
}

/// Serves every URL with the same bytes; reads local paths for real.
pub struct FakeImageLoader {
    pub url_bytes: Vec<u8>,
}

#[async_trait::async_trait]
impl ImageLoader for FakeImageLoader {
    async fn load(&self, source: &ImageSource) -> Result<LoadedImage, DomainError> {
        let bytes = match source {
            ImageSource::Url(_) => self.url_bytes.clone(),
            ImageSource::Path(p) => std::fs::read(p).map_err(|e| DomainError::io(p, e))?,
        };
        Ok(LoadedImage {
            bytes,
            extension: source.extension(),
        })
    }
}

pub fn setup_with(
    embedder: Arc<FakeEmbedder>,
    extractor: Arc<FakeExtractor>,
    output_dir: &Path,
    concurrency: usize,
) -> SolarKit {
    SolarKit::with_providers(
        embedder,
        extractor,
        Arc::new(FakeImageLoader {
            url_bytes: b"remote-image".to_vec(),
        }),
        Arc::new(FsResultWriter::new(output_dir)),
        concurrency,
    )
}

pub fn setup(embedder: Arc<FakeEmbedder>, output_dir: &Path) -> SolarKit {
    setup_with(
        embedder,
        Arc::new(FakeExtractor::returning(serde_json::json!({}))),
        output_dir,
        4,
    )
}

/// The three-passage AI/ML/weather fixture, vectors unit length.
pub fn ai_embedder() -> FakeEmbedder {
    FakeEmbedder::new()
        .with("AI is simulation", &[0.8, 0.6, 0.0])
        .with("ML learns from data", &[0.6, 0.8, 0.0])
        .with("weather is sunny", &[0.0, 0.0, 1.0])
        .with("What is AI?", &[1.0, 0.0, 0.0])
}

pub fn files_in(dir: &Path) -> Vec<std::path::PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            let mut v: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
            v.sort();
            v
        }
        Err(_) => vec![],
    }
}
