use crate::config::{require_api_key, Config};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::values::embedding_mode::EmbeddingMode;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Embedding client for the Upstage OpenAI-compatible `/embeddings` endpoint.
///
/// Query and passage mode map to two distinct models.
pub struct UpstageEmbeddingProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    query_model: String,
    passage_model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl UpstageEmbeddingProvider {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let defaults = Config::default();
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            query_model: defaults.query_model,
            passage_model: defaults.passage_model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
            .with_models(config.query_model.clone(), config.passage_model.clone())
    }

    pub fn with_models(mut self, query_model: impl Into<String>, passage_model: impl Into<String>) -> Self {
        self.query_model = query_model.into();
        self.passage_model = passage_model.into();
        self
    }

    fn model_for(&self, mode: EmbeddingMode) -> &str {
        match mode {
            EmbeddingMode::Query => &self.query_model,
            EmbeddingMode::Passage => &self.passage_model,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for UpstageEmbeddingProvider {
    async fn embed(&self, text: &str, mode: EmbeddingMode) -> Result<Vec<f32>, DomainError> {
        let api_key = require_api_key(self.api_key.as_deref())?;
        let model = self.model_for(mode);
        debug!(model, bytes = text.len(), "requesting embedding");

        let resp = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(api_key)
            .json(&EmbeddingRequest { input: text, model })
            .send()
            .await
            .map_err(|e| DomainError::EmbeddingProvider(format!("Upstage API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::EmbeddingProvider(format!(
                "Upstage API {status}: {body}"
            )));
        }

        let result: EmbeddingResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::EmbeddingProvider(format!("Malformed embedding response: {e}")))?;

        result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| DomainError::EmbeddingProvider("Embedding response contained no data".into()))
    }

    fn name(&self) -> &str {
        "upstage"
    }
}
