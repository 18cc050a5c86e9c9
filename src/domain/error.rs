use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Retrieval failed: {0}")]
    RetrievalFailed(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Check an embedding length against the configured dimensionality.
    pub fn check_dimension(expected: usize, actual: usize) -> Result<(), DomainError> {
        if expected == actual {
            Ok(())
        } else {
            Err(DomainError::DimensionMismatch { expected, actual })
        }
    }
}
