use crate::domain::entities::extraction::ExtractionOutcome;
use crate::domain::entities::similarity_result::QueryResult;
use crate::domain::error::DomainError;
use serde::Serialize;
use std::path::PathBuf;

/// Files written for one extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionArtifacts {
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
    pub image_path: PathBuf,
}

/// Files written for one search run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchArtifacts {
    pub markdown_paths: Vec<PathBuf>,
    pub json_path: PathBuf,
}

pub trait ResultWriter: Send + Sync {
    fn write_search(&self, results: &[QueryResult], timestamp: &str) -> Result<SearchArtifacts, DomainError>;
    fn write_extraction(
        &self,
        outcome: &ExtractionOutcome,
        timestamp: &str,
    ) -> Result<ExtractionArtifacts, DomainError>;
}
