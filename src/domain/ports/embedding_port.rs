use crate::domain::error::DomainError;

/// Text to fixed-length vector. Implementations must be deterministic for the
/// lifetime of a store: the same text always yields the same vector.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;
    fn dimension(&self) -> usize;
    fn name(&self) -> &str;
}
