use crate::domain::values::store_backend::StoreBackend;
use serde::{Deserialize, Serialize};

/// Status summary computed on demand; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub document_count: usize,
    pub ready: bool,
    pub backend: StoreBackend,
    pub vector_size: usize,
}
