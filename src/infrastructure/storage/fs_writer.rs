use super::markdown;
use crate::domain::entities::extraction::ExtractionOutcome;
use crate::domain::entities::similarity_result::QueryResult;
use crate::domain::error::DomainError;
use crate::domain::ports::result_writer::{ExtractionArtifacts, ResultWriter, SearchArtifacts};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EMBEDDINGS_DIR: &str = "embeddings";
pub const EXTRACTION_DIR: &str = "universal_extraction";

/// Writes run artifacts under a root directory.
pub struct FsResultWriter {
    root: PathBuf,
}

impl FsResultWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn create_dir(dir: &Path) -> Result<(), DomainError> {
    fs::create_dir_all(dir).map_err(|e| DomainError::io(dir, e))
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), DomainError> {
    fs::write(path, contents).map_err(|e| DomainError::io(path, e))
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value).map_err(|e| DomainError::Parse(format!("serialize: {e}")))
}

impl ResultWriter for FsResultWriter {
    fn write_search(&self, results: &[QueryResult], timestamp: &str) -> Result<SearchArtifacts, DomainError> {
        let dir = self.root.join(EMBEDDINGS_DIR);
        create_dir(&dir)?;

        let mut markdown_paths = Vec::with_capacity(results.len());
        for (i, result) in results.iter().enumerate() {
            let path = dir.join(format!("query_{}_{timestamp}.md", i + 1));
            write_file(&path, markdown::render_query_result(result))?;
            markdown_paths.push(path);
        }

        let json_path = dir.join(format!("results_{timestamp}.json"));
        write_file(&json_path, to_pretty_json(&results)?)?;

        info!(files = markdown_paths.len() + 1, dir = %dir.display(), "wrote search results");
        Ok(SearchArtifacts { markdown_paths, json_path })
    }

    fn write_extraction(
        &self,
        outcome: &ExtractionOutcome,
        timestamp: &str,
    ) -> Result<ExtractionArtifacts, DomainError> {
        let dir = self.root.join(EXTRACTION_DIR).join(timestamp);
        create_dir(&dir)?;

        let image_path = dir.join(format!("image{}", outcome.image.extension));
        write_file(&image_path, &outcome.image.bytes)?;

        let pretty = to_pretty_json(&outcome.data)?;
        let json_path = dir.join("result.json");
        write_file(&json_path, &pretty)?;

        let markdown_path = dir.join("result.md");
        write_file(&markdown_path, markdown::render_extraction(outcome, timestamp, &pretty))?;

        info!(dir = %dir.display(), "wrote extraction result");
        Ok(ExtractionArtifacts {
            json_path,
            markdown_path,
            image_path,
        })
    }
}
