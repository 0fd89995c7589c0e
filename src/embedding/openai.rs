use serde::{Deserialize, Serialize};

use super::Embedder;
use crate::{Result, SeedError};

/// Client for an OpenAI-compatible `/embeddings` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiEmbedder {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        tracing::debug!(model = %self.model, inputs = texts.len(), "Requesting embeddings");

        let payload = EmbeddingRequest {
            model: &self.model,
            input: texts,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(SeedError::Provider { status, body });
        }

        let mut response: EmbeddingResponse = response.json().await?;
        response.data.sort_by_key(|entry| entry.index);

        Ok(response
            .data
            .into_iter()
            .map(|entry| entry.embedding)
            .collect())
    }
}

fn error_body(body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(error = %err, "Failed to read embeddings error body");
            format!("<body unavailable: {err}>")
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}
