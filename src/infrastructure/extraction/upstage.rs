use crate::config::{require_api_key, Config};
use crate::domain::error::DomainError;
use crate::domain::ports::extraction_port::ExtractionProvider;
use crate::domain::values::extraction_mode::ExtractionMode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// Universal information extraction over the chat-completions endpoint.
pub struct UpstageExtractionProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl UpstageExtractionProvider {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, model: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.unwrap_or_else(|| Config::default().extraction_model),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.extraction_base_url.clone(),
            Some(config.extraction_model.clone()),
        )
    }
}

/// Accepts either a bare JSON schema or a complete
/// `{"type": "json_schema", "json_schema": {...}}` descriptor.
pub fn response_format(schema: &Value) -> Value {
    if schema.get("type").and_then(Value::as_str) == Some("json_schema") {
        return schema.clone();
    }
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "extraction_schema",
            "schema": schema,
        }
    })
}

pub fn request_body(model: &str, image: &[u8], schema: &Value, mode: ExtractionMode) -> Value {
    let data_url = format!("data:application/octet-stream;base64,{}", STANDARD.encode(image));
    json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": [{
                "type": "image_url",
                "image_url": { "url": data_url }
            }]
        }],
        "response_format": response_format(schema),
        "confidence": true,
        "mode": mode.to_string(),
    })
}

#[async_trait::async_trait]
impl ExtractionProvider for UpstageExtractionProvider {
    async fn extract(&self, image: &[u8], schema: &Value, mode: ExtractionMode) -> Result<Value, DomainError> {
        let api_key = require_api_key(self.api_key.as_deref())?;
        debug!(model = %self.model, %mode, bytes = image.len(), "requesting extraction");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body(&self.model, image, schema, mode))
            .send()
            .await
            .map_err(|e| DomainError::Extraction(format!("Upstage API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Extraction(format!("Upstage API {status}: {body}")));
        }

        let result: ChatResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Extraction(format!("Malformed extraction response: {e}")))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::Extraction("Extraction response had no message content".into()))?;

        serde_json::from_str(&content)
            .map_err(|e| DomainError::Extraction(format!("Message content is not JSON: {e}")))
    }
}
