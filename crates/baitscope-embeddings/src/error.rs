//! Error types for the embedding layer.

use std::time::Duration;

use thiserror::Error;

/// Errors from embedding generation, classification, or index search.
///
/// Callers treat every variant as "no embedding signal"; none of them is
/// allowed to fail an analysis request.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Provider is not configured or exhausted its retries.
    #[error("embedding provider unavailable")]
    Unavailable,

    /// Empty input text cannot be embedded.
    #[error("empty input text")]
    EmptyInput,

    /// A single embed attempt exceeded its deadline.
    #[error("embedding request timed out after {0:?}")]
    Timeout(Duration),

    /// Provider-reported failure.
    #[error("provider error: {0}")]
    Provider(String),

    /// Seed corpus missing or malformed.
    #[error("seed corpus error: {0}")]
    SeedCorpus(String),
}

pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
