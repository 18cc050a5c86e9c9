use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "text-embedding-3-small";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Real embedding model behind the same port as [`HashEmbedder`](super::hashed::HashEmbedder).
///
/// Requests `dimensions` so the returned vectors match the configured vector size.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    dimension: usize,
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    input: Vec<&'a str>,
    model: &'a str,
    dimensions: usize,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    data: Vec<OpenAiEmbedding>,
}

#[derive(Deserialize)]
struct OpenAiEmbedding {
    embedding: Vec<f32>,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: Option<String>, dimension: usize) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            dimension,
        }
    }

    /// Point at an OpenAI-compatible endpoint instead of api.openai.com.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&OpenAiRequest {
                input: vec![text],
                model: &self.model,
                dimensions: self.dimension,
            })
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("OpenAI API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!("OpenAI API {status}: {body}")));
        }

        let result: OpenAiResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;

        let embedding = result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| DomainError::Embedding("empty embedding result".to_string()))?;
        DomainError::check_dimension(self.dimension, embedding.len())?;
        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_small_model() {
        let provider = OpenAiProvider::new("key".into(), None, 384);
        assert_eq!(provider.model(), "text-embedding-3-small");
        assert_eq!(provider.dimension(), 384);
        assert_eq!(provider.endpoint(), "https://api.openai.com/v1/embeddings");
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let provider = OpenAiProvider::new("key".into(), Some("custom".into()), 8)
            .with_base_url("http://localhost:8080/");
        assert_eq!(provider.endpoint(), "http://localhost:8080/v1/embeddings");
        assert_eq!(provider.model(), "custom");
    }

    #[test]
    fn request_body_carries_dimensions() {
        let body = serde_json::to_value(OpenAiRequest {
            input: vec!["hi"],
            model: "m",
            dimensions: 16,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"input": ["hi"], "model": "m", "dimensions": 16}));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_embedding_error() {
        let provider =
            OpenAiProvider::new("key".into(), None, 4).with_base_url("http://127.0.0.1:9");
        let err = provider.embed("text").await.unwrap_err();
        assert!(matches!(err, DomainError::Embedding(_)));
    }
}
