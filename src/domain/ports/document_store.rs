use crate::domain::error::DomainError;
use crate::domain::values::store_backend::StoreBackend;
use async_trait::async_trait;

/// Persists `(id, text, embedding)` triples and answers match queries by embedding.
///
/// `search` returns at most `limit` texts, each one exactly as it was added.
/// Ordering is up to the implementation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn add(&self, id: u64, text: &str, embedding: &[f32]) -> Result<(), DomainError>;

    async fn search(&self, query_embedding: &[f32], limit: usize) -> Result<Vec<String>, DomainError>;

    /// Advisory document count. Never fails; implementations report 0 when
    /// the number cannot be determined.
    async fn count(&self) -> usize;

    fn backend(&self) -> StoreBackend;
}
