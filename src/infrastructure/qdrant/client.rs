use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{IndexHit, IndexPoint, VectorIndex};
use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{
    CountPointsBuilder, CreateCollectionBuilder, DeleteCollectionBuilder, Distance, PointStruct,
    ScoredPoint, SearchPointsBuilder, UpsertPointsBuilder, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant, QdrantError};
use std::time::Duration;
use tracing::debug;

const TEXT_FIELD: &str = "text";

/// Qdrant collection reached through the official gRPC client.
pub struct QdrantGrpcIndex {
    client: Qdrant,
    collection: String,
}

impl QdrantGrpcIndex {
    /// Builds the client without connecting; the first call opens the channel.
    pub fn new(url: &str, collection: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = Qdrant::from_url(url)
            .timeout(timeout)
            .connect_timeout(timeout)
            .skip_compatibility_check()
            .build()
            .map_err(|e| qdrant_error("client", e))?;
        Ok(Self {
            client,
            collection: collection.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VectorIndex for QdrantGrpcIndex {
    async fn ensure_collection(&self, dimension: usize, recreate: bool) -> Result<(), DomainError> {
        let exists = self
            .client
            .collection_exists(&self.collection)
            .await
            .map_err(|e| qdrant_error("collection exists", e))?;

        if exists && !recreate {
            debug!(collection = %self.collection, "reusing existing collection");
            return Ok(());
        }
        if exists {
            self.client
                .delete_collection(DeleteCollectionBuilder::new(&self.collection))
                .await
                .map_err(|e| qdrant_error("delete collection", e))?;
            debug!(collection = %self.collection, "dropped collection");
        }

        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection)
                    .vectors_config(VectorParamsBuilder::new(dimension as u64, Distance::Cosine)),
            )
            .await
            .map_err(|e| qdrant_error("create collection", e))?;
        debug!(collection = %self.collection, dimension, "created collection");
        Ok(())
    }

    async fn upsert(&self, point: IndexPoint) -> Result<(), DomainError> {
        let point = PointStruct::new(point.id, point.vector, text_payload(&point.text));
        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, vec![point]).wait(true))
            .await
            .map_err(|e| qdrant_error("upsert", e))?;
        Ok(())
    }

    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<IndexHit>, DomainError> {
        let resp = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, vector.to_vec(), limit as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| qdrant_error("search", e))?;
        Ok(resp.result.into_iter().map(into_hit).collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let resp = self
            .client
            .count(CountPointsBuilder::new(&self.collection).exact(true))
            .await
            .map_err(|e| qdrant_error("count", e))?;
        Ok(resp.result.map(|r| r.count as usize).unwrap_or_default())
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}

fn text_payload(text: &str) -> Payload {
    let mut payload = Payload::new();
    payload.insert(TEXT_FIELD, text.to_string());
    payload
}

fn into_hit(point: ScoredPoint) -> IndexHit {
    let id = match point.id.and_then(|p| p.point_id_options) {
        Some(PointIdOptions::Num(n)) => n,
        _ => 0,
    };
    let text = point
        .payload
        .get(TEXT_FIELD)
        .and_then(|v| match &v.kind {
            Some(Kind::StringValue(s)) => Some(s.clone()),
            _ => None,
        });
    IndexHit { id, text }
}

fn qdrant_error(op: &str, e: QdrantError) -> DomainError {
    DomainError::StoreUnavailable(format!("Qdrant {op}: {e}"))
}
