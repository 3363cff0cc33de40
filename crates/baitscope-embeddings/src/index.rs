//! Vector-index contract and implementations.
//!
//! When a populated index is available, the k nearest labeled neighbors
//! vote on the score and that path takes precedence over the centroid
//! classifier. An empty search result means the index is unavailable, not
//! that the score is zero.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::EmbeddingResult;
use crate::seed::Label;
use crate::similarity::cosine_similarity;

/// One labeled search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub label: Label,
    /// Cosine distance (1 - similarity); smaller is closer.
    pub distance: f32,
}

/// Contract for nearest-neighbor search over labeled embeddings.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Return up to `k` nearest neighbors. An empty result is treated as
    /// "index unavailable" by callers.
    async fn search(&self, embedding: &[f32], k: usize) -> EmbeddingResult<Vec<Neighbor>>;

    /// Whether the index is configured and populated.
    fn is_ready(&self) -> bool;
}

/// Soft majority vote: the fraction of neighbors labeled bait.
pub fn knn_vote(neighbors: &[Neighbor]) -> f32 {
    if neighbors.is_empty() {
        return 0.0;
    }
    let bait = neighbors.iter().filter(|n| n.label == Label::Bait).count();
    bait as f32 / neighbors.len() as f32
}

/// Placeholder for a not-yet-configured external index. Always empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVectorIndex;

#[async_trait]
impl VectorIndex for NoopVectorIndex {
    async fn search(&self, _embedding: &[f32], _k: usize) -> EmbeddingResult<Vec<Neighbor>> {
        Ok(Vec::new())
    }

    fn is_ready(&self) -> bool {
        false
    }
}

/// Exact-scan in-memory index.
///
/// O(n) per search; intended for tests and small seed sets, not production
/// workloads.
#[derive(Debug, Default)]
pub struct InMemoryVectorIndex {
    entries: RwLock<Vec<(Label, Vec<f32>)>>,
}

impl InMemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, label: Label, embedding: Vec<f32>) {
        self.entries.write().push((label, embedding));
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn search(&self, embedding: &[f32], k: usize) -> EmbeddingResult<Vec<Neighbor>> {
        let entries = self.entries.read();
        let mut neighbors: Vec<Neighbor> = entries
            .iter()
            .map(|(label, vector)| Neighbor {
                label: *label,
                distance: 1.0 - cosine_similarity(embedding, vector),
            })
            .collect();
        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);
        Ok(neighbors)
    }

    fn is_ready(&self) -> bool {
        !self.is_empty()
    }
}
