use crate::domain::entities::dataset::Dataset;
use crate::domain::error::DomainError;
use std::path::Path;

pub fn load_dataset(path: &Path) -> Result<Dataset, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DomainError::io(path, e))?;
    serde_json::from_str(&raw)
        .map_err(|e| DomainError::Parse(format!("{}: {e}", path.display())))
}

pub fn load_schema(path: &Path) -> Result<serde_json::Value, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DomainError::io(path, e))?;
    serde_json::from_str(&raw)
        .map_err(|e| DomainError::Parse(format!("{}: {e}", path.display())))
}
