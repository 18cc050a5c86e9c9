use serde::{Deserialize, Serialize};

/// A stored document. Immutable once created; the id is assigned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Document {
    pub fn new(id: u64, text: String, embedding: Vec<f32>) -> Self {
        Self { id, text, embedding }
    }
}
