use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::vector_index::{IndexPoint, VectorIndex};
use crate::domain::values::store_backend::StoreBackend;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Document store backed by a remote vector index.
///
/// Each `add` is one upsert keyed by the document id with payload `{text}`.
/// `search` keeps the index's ranking and drops hits without text.
pub struct QdrantDocumentStore {
    index: Arc<dyn VectorIndex>,
    dimension: usize,
}

impl QdrantDocumentStore {
    /// Provision the collection and return a store over it.
    pub async fn connect(
        index: Arc<dyn VectorIndex>,
        dimension: usize,
        recreate: bool,
    ) -> Result<Self, DomainError> {
        index.ensure_collection(dimension, recreate).await?;
        Ok(Self::new(index, dimension))
    }

    /// Wrap an index whose collection already exists with `dimension`.
    pub fn new(index: Arc<dyn VectorIndex>, dimension: usize) -> Self {
        Self { index, dimension }
    }
}

#[async_trait]
impl DocumentStore for QdrantDocumentStore {
    async fn add(&self, id: u64, text: &str, embedding: &[f32]) -> Result<(), DomainError> {
        DomainError::check_dimension(self.dimension, embedding.len())?;
        self.index
            .upsert(IndexPoint {
                id,
                vector: embedding.to_vec(),
                text: text.to_string(),
            })
            .await?;
        debug!(id, collection = self.index.collection(), "upserted document");
        Ok(())
    }

    async fn search(&self, query_embedding: &[f32], limit: usize) -> Result<Vec<String>, DomainError> {
        DomainError::check_dimension(self.dimension, query_embedding.len())?;
        let hits = self.index.search(query_embedding, limit).await?;
        Ok(hits
            .into_iter()
            .filter_map(|hit| match hit.text {
                Some(text) if !text.is_empty() => Some(text),
                _ => {
                    debug!(id = hit.id, "skipping hit without text");
                    None
                }
            })
            .take(limit)
            .collect())
    }

    async fn count(&self) -> usize {
        match self.index.count().await {
            Ok(n) => n,
            Err(e) => {
                warn!(collection = self.index.collection(), error = %e, "count failed, reporting 0");
                0
            }
        }
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Qdrant
    }
}
