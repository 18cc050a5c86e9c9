//! Port for a remote vector index reached through a handful of operations.
//!
//! The remote-backed document store only needs to upsert a point, run a
//! nearest-neighbour query and read the point count. Provisioning the
//! collection is a separate, construction-time call.

use crate::domain::error::DomainError;
use async_trait::async_trait;

/// A point written to the index: vector plus `{text}` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexPoint {
    pub id: u64,
    pub vector: Vec<f32>,
    pub text: String,
}

/// A search hit in the index's own ranking order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexHit {
    pub id: u64,
    /// `None` when the stored payload has no `text` field.
    pub text: Option<String>,
}

#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create the collection with the given dimensionality and cosine distance.
    /// With `recreate`, any existing collection of the same name is dropped first.
    async fn ensure_collection(&self, dimension: usize, recreate: bool) -> Result<(), DomainError>;

    async fn upsert(&self, point: IndexPoint) -> Result<(), DomainError>;

    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<IndexHit>, DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;

    fn collection(&self) -> &str;
}
