use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

/// Deterministic placeholder embedder.
///
/// The text is hashed with xxh3 and the hash seeds a PRNG that fills the
/// vector with values in `[0, 1)`. Identical text always produces an identical
/// vector, within a run and across runs. Different texts are not guaranteed to
/// land far apart: the vectors carry no meaning.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(xxh3_64(text.as_bytes()));
        (0..self.dimension).map(|_| rng.gen::<f32>()).collect()
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        Ok(self.embed_sync(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hash"
    }
}
