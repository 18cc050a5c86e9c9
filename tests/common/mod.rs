//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use minirag::config::RagConfig;
use minirag::domain::error::DomainError;
use minirag::domain::ports::vector_index::{IndexHit, IndexPoint, VectorIndex};
use minirag::infrastructure::embeddings::hashed::HashEmbedder;
use minirag::infrastructure::memory::document_store::InMemoryDocumentStore;
use minirag::MiniRag;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const DIM: usize = 8;

pub fn config() -> RagConfig {
    RagConfig {
        vector_size: DIM,
        ..RagConfig::in_memory()
    }
}

pub fn setup() -> MiniRag {
    MiniRag::with_providers(
        &config(),
        Arc::new(HashEmbedder::new(DIM)),
        Arc::new(InMemoryDocumentStore::with_dimension(DIM)),
    )
    .unwrap()
}

/// Remote index that cannot be reached.
pub struct DownIndex;

#[async_trait]
impl VectorIndex for DownIndex {
    async fn ensure_collection(&self, _dimension: usize, _recreate: bool) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn upsert(&self, _point: IndexPoint) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn search(&self, _vector: &[f32], _limit: usize) -> Result<Vec<IndexHit>, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    fn collection(&self) -> &str {
        "down"
    }
}

/// In-process stand-in for a vector database whose ranking is scripted:
/// `search` returns stored points in `ranking` order.
#[derive(Default)]
pub struct ScriptedIndex {
    pub points: Mutex<Vec<IndexPoint>>,
    pub ranking: Mutex<Vec<u64>>,
    pub provisioned: Mutex<Option<usize>>,
    /// `recreate` flag of every `ensure_collection` call.
    pub ensure_calls: Mutex<Vec<bool>>,
    pub count_fails: bool,
    /// Keep the next upserted point, then report a timeout anyway.
    pub time_out_after_write: AtomicBool,
}

impl ScriptedIndex {
    pub fn rank(&self, ids: &[u64]) {
        *self.ranking.lock().unwrap() = ids.to_vec();
    }
}

#[async_trait]
impl VectorIndex for ScriptedIndex {
    async fn ensure_collection(&self, dimension: usize, recreate: bool) -> Result<(), DomainError> {
        *self.provisioned.lock().unwrap() = Some(dimension);
        self.ensure_calls.lock().unwrap().push(recreate);
        Ok(())
    }

    async fn upsert(&self, point: IndexPoint) -> Result<(), DomainError> {
        let mut points = self.points.lock().unwrap();
        points.retain(|p| p.id != point.id);
        points.push(point);
        if self.time_out_after_write.swap(false, Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable("operation timed out".into()));
        }
        Ok(())
    }

    async fn search(&self, _vector: &[f32], limit: usize) -> Result<Vec<IndexHit>, DomainError> {
        let points = self.points.lock().unwrap();
        let ranking = self.ranking.lock().unwrap();
        Ok(ranking
            .iter()
            .filter_map(|id| points.iter().find(|p| p.id == *id))
            .take(limit)
            .map(|p| IndexHit {
                id: p.id,
                text: Some(p.text.clone()),
            })
            .collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        if self.count_fails {
            return Err(DomainError::StoreUnavailable("timeout".into()));
        }
        Ok(self.points.lock().unwrap().len())
    }

    fn collection(&self) -> &str {
        "scripted"
    }
}
