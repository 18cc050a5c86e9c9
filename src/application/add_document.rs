use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Assigns document ids and persists documents.
///
/// The id is reserved before the store write and the counter lock is held
/// across it, so ids come out unique and in call order under concurrent calls.
/// A failed write still consumes its id: the remote side may have kept the
/// point, and handing the id out again would overwrite it.
pub struct AddDocumentUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn DocumentStore>,
    next_id: Mutex<u64>,
}

impl AddDocumentUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            embedder,
            store,
            next_id: Mutex::new(0),
        }
    }

    pub async fn execute(&self, text: &str) -> Result<u64, DomainError> {
        let embedding = self.embedder.embed(text).await?;

        let mut next_id = self.next_id.lock().await;
        let id = *next_id;
        *next_id += 1;
        self.store
            .add(id, text, &embedding)
            .await
            .map_err(as_store_error)?;

        debug!(id, chars = text.chars().count(), "added document");
        Ok(id)
    }

    /// Sequential bulk add; stops at the first failure.
    pub async fn execute_many(&self, texts: &[String]) -> Result<Vec<u64>, DomainError> {
        let mut ids = Vec::with_capacity(texts.len());
        for text in texts {
            ids.push(self.execute(text).await?);
        }
        Ok(ids)
    }
}

fn as_store_error(e: DomainError) -> DomainError {
    match e {
        DomainError::StoreUnavailable(_) | DomainError::DimensionMismatch { .. } => e,
        other => DomainError::StoreUnavailable(other.to_string()),
    }
}
