use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::values::store_backend::StoreBackend;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-lifetime document store.
///
/// `search` is an insertion-order prefix: the query vector is not compared
/// against anything. Documents are pushed under the write lock, so readers
/// never see a partially added document.
pub struct InMemoryDocumentStore {
    docs: RwLock<Vec<Document>>,
    dimension: Option<usize>,
}

impl InMemoryDocumentStore {
    /// Accepts embeddings of any length.
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            dimension: None,
        }
    }

    /// Rejects embeddings whose length differs from `dimension`.
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            dimension: Some(dimension),
        }
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.docs.read().await.clone()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn add(&self, id: u64, text: &str, embedding: &[f32]) -> Result<(), DomainError> {
        if let Some(expected) = self.dimension {
            DomainError::check_dimension(expected, embedding.len())?;
        }
        let mut docs = self.docs.write().await;
        docs.push(Document::new(id, text.to_string(), embedding.to_vec()));
        debug!(id, total = docs.len(), "stored document in memory");
        Ok(())
    }

    async fn search(&self, _query_embedding: &[f32], limit: usize) -> Result<Vec<String>, DomainError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().take(limit).map(|d| d.text.clone()).collect())
    }

    async fn count(&self) -> usize {
        self.docs.read().await.len()
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
