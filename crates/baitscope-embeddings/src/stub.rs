//! Deterministic hash-based embedding provider.
//!
//! Produces stable pseudo-random unit vectors from a hash of the input, so
//! tests and offline runs exercise the full embedding path without a real
//! provider. Identical text always maps to the identical vector.

use async_trait::async_trait;

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::provider::EmbeddingProvider;
use crate::similarity::l2_norm;

const DEFAULT_DIMENSIONS: usize = 64;

/// Test/offline provider generating deterministic embeddings.
#[derive(Debug, Clone)]
pub struct StubEmbeddingProvider {
    dimensions: usize,
    available: bool,
}

impl Default for StubEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StubEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            available: true,
        }
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions,
            available: true,
        }
    }

    /// A provider that reports itself unreachable, for degradation tests.
    pub fn unavailable() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            available: false,
        }
    }

    fn hash_seed(text: &str) -> u64 {
        // FNV-1a
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in text.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash
    }

    fn generate(&self, text: &str) -> Vec<f32> {
        // xorshift over the FNV seed, mapped into [-1, 1], then normalized.
        let mut state = Self::hash_seed(text).max(1);
        let mut vector = Vec::with_capacity(self.dimensions);
        for _ in 0..self.dimensions {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f32 / (1u64 << 53) as f32;
            vector.push(unit * 2.0 - 1.0);
        }
        let norm = l2_norm(&vector);
        if norm > f32::EPSILON {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        if !self.available {
            return Err(EmbeddingError::Unavailable);
        }
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }
        Ok(self.generate(text))
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn model_id(&self) -> &str {
        "stub-embedding-v1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_text_same_vector() {
        let provider = StubEmbeddingProvider::new();
        let a = provider.embed("hello world").await.unwrap();
        let b = provider.embed("hello world").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn different_text_different_vector() {
        let provider = StubEmbeddingProvider::new();
        let a = provider.embed("hello world").await.unwrap();
        let b = provider.embed("goodbye world").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn vectors_are_normalized() {
        let provider = StubEmbeddingProvider::new();
        let v = provider.embed("some text").await.unwrap();
        assert_eq!(v.len(), DEFAULT_DIMENSIONS);
        assert!((l2_norm(&v) - 1.0).abs() < 1e-4);
    }

    #[tokio::test]
    async fn unavailable_provider_errors() {
        let provider = StubEmbeddingProvider::unavailable();
        assert!(!provider.is_available());
        assert!(matches!(
            provider.embed("text").await,
            Err(EmbeddingError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn empty_text_rejected() {
        let provider = StubEmbeddingProvider::new();
        assert!(matches!(
            provider.embed("").await,
            Err(EmbeddingError::EmptyInput)
        ));
    }
}
