pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::embed_batch::BatchEmbedder;
use crate::application::extract::ExtractUseCase;
use crate::application::search::SearchUseCase;
use crate::config::Config;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::extraction::ExtractionOutcome;
use crate::domain::entities::similarity_result::QueryResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::extraction_port::ExtractionProvider;
use crate::domain::ports::image_loader::ImageLoader;
use crate::domain::ports::result_writer::{ExtractionArtifacts, ResultWriter, SearchArtifacts};
use crate::domain::similarity_index::check_k;
use crate::domain::values::embedding_mode::EmbeddingMode;
use crate::domain::values::extraction_mode::ExtractionMode;
use crate::domain::values::image_source::ImageSource;
use crate::infrastructure::embeddings::upstage::UpstageEmbeddingProvider;
use crate::infrastructure::extraction::upstage::UpstageExtractionProvider;
use crate::infrastructure::images::DefaultImageLoader;
use crate::infrastructure::storage::fs_writer::FsResultWriter;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Ranked results of a search run and the files they were written to.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub results: Vec<QueryResult>,
    pub artifacts: SearchArtifacts,
}

/// Extracted data and the files it was written to.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    pub outcome: ExtractionOutcome,
    pub artifacts: ExtractionArtifacts,
}

pub struct SolarKit {
    embedder: Arc<dyn EmbeddingProvider>,
    search_uc: SearchUseCase,
    extract_uc: ExtractUseCase,
    writer: Arc<dyn ResultWriter>,
}

impl SolarKit {
    pub fn new(config: &Config) -> Self {
        Self::with_providers(
            Arc::new(UpstageEmbeddingProvider::from_config(config)),
            Arc::new(UpstageExtractionProvider::from_config(config)),
            Arc::new(DefaultImageLoader::new()),
            Arc::new(FsResultWriter::new(config.output_dir.clone())),
            config.concurrency,
        )
    }

    pub fn with_providers(
        embedder: Arc<dyn EmbeddingProvider>,
        extractor: Arc<dyn ExtractionProvider>,
        images: Arc<dyn ImageLoader>,
        writer: Arc<dyn ResultWriter>,
        concurrency: usize,
    ) -> Self {
        Self {
            search_uc: SearchUseCase::new(embedder.clone(), concurrency),
            extract_uc: ExtractUseCase::new(extractor, images),
            embedder,
            writer,
        }
    }

    pub async fn embed(&self, text: &str, mode: EmbeddingMode) -> Result<Vec<f32>, DomainError> {
        self.embedder.embed(text, mode).await
    }

    pub async fn embed_all(
        &self,
        texts: &[String],
        mode: EmbeddingMode,
        concurrency: usize,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        BatchEmbedder::new(self.embedder.clone(), concurrency)
            .embed_all(texts, mode)
            .await
    }

    pub fn load_dataset(&self, path: &Path) -> Result<Dataset, DomainError> {
        infrastructure::dataset::load_dataset(path)
    }

    /// Ranks every passage for every query without touching the filesystem.
    pub async fn search(&self, dataset: &Dataset) -> Result<Vec<QueryResult>, DomainError> {
        self.search_uc.run(dataset).await
    }

    /// Runs the search and writes results only once every query has been ranked.
    /// `top` is how many results per query the caller will show; it is checked
    /// before any embedding call.
    pub async fn search_and_save(&self, dataset: &Dataset, top: usize) -> Result<SearchReport, DomainError> {
        check_k(top)?;
        let results = self.search_uc.run(dataset).await?;
        let artifacts = self.writer.write_search(&results, &timestamp())?;
        Ok(SearchReport { results, artifacts })
    }

    pub async fn extract(
        &self,
        source: ImageSource,
        schema_path: &Path,
        mode: ExtractionMode,
    ) -> Result<ExtractionOutcome, DomainError> {
        self.extract_uc.execute(source, schema_path, mode).await
    }

    pub async fn extract_and_save(
        &self,
        source: ImageSource,
        schema_path: &Path,
        mode: ExtractionMode,
    ) -> Result<ExtractionReport, DomainError> {
        let outcome = self.extract_uc.execute(source, schema_path, mode).await?;
        let artifacts = self.writer.write_extraction(&outcome, &timestamp())?;
        Ok(ExtractionReport { outcome, artifacts })
    }
}

/// Local time, second resolution; used to keep result file names unique.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
