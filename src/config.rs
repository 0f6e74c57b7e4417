//! Layered configuration: built-in defaults, then `solarkit.toml`, then
//! `UPSTAGE_*` environment variables.

use crate::domain::error::DomainError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "solarkit.toml";
pub const ENV_PREFIX: &str = "UPSTAGE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Absent key is reported on the first remote call, not at load time.
    pub api_key: Option<String>,
    pub base_url: String,
    pub extraction_base_url: String,
    pub query_model: String,
    pub passage_model: String,
    pub extraction_model: String,
    /// Maximum in-flight embedding calls during batch embedding.
    pub concurrency: usize,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.upstage.ai/v1".to_string(),
            extraction_base_url: "https://api.upstage.ai/v1/information-extraction".to_string(),
            query_model: "embedding-query".to_string(),
            passage_model: "embedding-passage".to_string(),
            extraction_model: "information-extract".to_string(),
            concurrency: 4,
            output_dir: PathBuf::from("result"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, DomainError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(file: &Path) -> Result<Self, DomainError> {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| DomainError::Configuration(e.to_string()))?;

        if config.concurrency == 0 {
            return Err(DomainError::Configuration(
                "concurrency must be at least 1".into(),
            ));
        }
        Ok(config)
    }
}

/// The API key, or a configuration error naming the variable to set.
pub fn require_api_key(key: Option<&str>) -> Result<&str, DomainError> {
    match key {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(DomainError::Configuration(format!(
            "missing API key; set {ENV_PREFIX}API_KEY"
        ))),
    }
}
