use crate::domain::ports::document_store::DocumentStore;
use crate::domain::values::service_status::ServiceStatus;
use std::sync::Arc;

pub struct StatusUseCase {
    store: Arc<dyn DocumentStore>,
    vector_size: usize,
}

impl StatusUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, vector_size: usize) -> Self {
        Self { store, vector_size }
    }

    /// Never fails: the store reports 0 when it cannot count.
    pub async fn status(&self) -> ServiceStatus {
        ServiceStatus {
            document_count: self.store.count().await,
            ready: true,
            backend: self.store.backend(),
            vector_size: self.vector_size,
        }
    }
}
