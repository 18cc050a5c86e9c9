pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::add_document::AddDocumentUseCase;
use crate::application::ask::AskUseCase;
use crate::application::status::StatusUseCase;
use crate::application::workflow::RagWorkflow;
use crate::config::RagConfig;
use crate::domain::entities::answer::Answer;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::VectorIndex;
use crate::domain::values::provider_kind::ProviderKind;
use crate::domain::values::service_status::ServiceStatus;
use crate::infrastructure::embeddings::hashed::HashEmbedder;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::memory::document_store::InMemoryDocumentStore;
use crate::infrastructure::qdrant::client::QdrantGrpcIndex;
use crate::infrastructure::qdrant::document_store::QdrantDocumentStore;
use std::sync::Arc;
use tracing::{info, warn};

/// The RAG service: id assignment, ingestion, question answering and status.
pub struct MiniRag {
    add_document_uc: AddDocumentUseCase,
    ask_uc: AskUseCase,
    status_uc: StatusUseCase,
}

impl MiniRag {
    pub async fn from_env() -> Result<Self, DomainError> {
        Self::new(RagConfig::from_env()?).await
    }

    /// Build the embedder from config and pick a store, falling back to
    /// memory when the remote index cannot be set up.
    pub async fn new(config: RagConfig) -> Result<Self, DomainError> {
        let embedder = build_embedder(&config);
        let store = connect_store(&config).await;
        Self::with_providers(&config, embedder, store)
    }

    /// Same as [`MiniRag::new`] but with a caller-supplied remote index.
    pub async fn with_remote_index(
        config: &RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
    ) -> Result<Self, DomainError> {
        let store = select_store(Some(index), config).await;
        Self::with_providers(config, embedder, store)
    }

    pub fn with_providers(
        config: &RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, DomainError> {
        if embedder.dimension() != config.vector_size {
            return Err(DomainError::Config(format!(
                "embedder '{}' produces {} dimensions but vector size is {}",
                embedder.name(),
                embedder.dimension(),
                config.vector_size
            )));
        }

        let workflow = Arc::new(RagWorkflow::new(
            embedder.clone(),
            store.clone(),
            config.retrieval_limit,
            config.excerpt_chars,
        ));

        Ok(Self {
            add_document_uc: AddDocumentUseCase::new(embedder, store.clone()),
            ask_uc: AskUseCase::new(workflow),
            status_uc: StatusUseCase::new(store, config.vector_size),
        })
    }

    pub async fn add_document(&self, text: &str) -> Result<u64, DomainError> {
        self.add_document_uc.execute(text).await
    }

    pub async fn add_documents(&self, texts: &[String]) -> Result<Vec<u64>, DomainError> {
        self.add_document_uc.execute_many(texts).await
    }

    pub async fn ask(&self, question: &str) -> Result<Answer, DomainError> {
        self.ask_uc.execute(question).await
    }

    pub async fn status(&self) -> ServiceStatus {
        self.status_uc.status().await
    }
}

pub fn build_embedder(config: &RagConfig) -> Arc<dyn EmbeddingProvider> {
    match config.embedding_provider {
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
            config.embedding_api_key.clone(),
            config.embedding_model.clone(),
            config.vector_size,
        )),
        ProviderKind::Hash => Arc::new(HashEmbedder::new(config.vector_size)),
    }
}

/// Remote index from config when one is configured, otherwise memory.
pub async fn connect_store(config: &RagConfig) -> Arc<dyn DocumentStore> {
    let index = match config.qdrant_url.as_deref() {
        None => None,
        Some(url) => match QdrantGrpcIndex::new(url, &config.collection, config.qdrant_timeout) {
            Ok(index) => Some(Arc::new(index) as Arc<dyn VectorIndex>),
            Err(e) => {
                warn!(error = %e, "could not build Qdrant client");
                None
            }
        },
    };
    select_store(index, config).await
}

/// Any failure setting up the remote index degrades to the in-memory store.
pub async fn select_store(
    index: Option<Arc<dyn VectorIndex>>,
    config: &RagConfig,
) -> Arc<dyn DocumentStore> {
    if let Some(index) = index {
        let collection = index.collection().to_string();
        match QdrantDocumentStore::connect(index, config.vector_size, config.recreate_collection).await {
            Ok(store) => {
                info!(%collection, dimension = config.vector_size, "using Qdrant document store");
                return Arc::new(store);
            }
            Err(e) => {
                warn!(%collection, error = %e, "Qdrant unavailable, falling back to in-memory store");
            }
        }
    }
    info!("using in-memory document store");
    Arc::new(InMemoryDocumentStore::with_dimension(config.vector_size))
}
