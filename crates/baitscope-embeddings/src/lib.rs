//! Baitscope Embeddings Library
//!
//! The optional, best-effort scoring path. An [`provider::EmbeddingProvider`]
//! turns text into vectors; the [`classifier::CentroidClassifier`] compares a
//! query embedding against bait/neutral centroids computed once from a seed
//! corpus; a [`index::VectorIndex`], when available, replaces the centroid
//! score with a k-NN label vote.
//!
//! Everything here degrades to "unavailable" rather than failing the caller:
//! the deterministic layer in `baitscope-core` never depends on this crate
//! succeeding.

pub mod classifier;
pub mod error;
pub mod index;
pub mod provider;
pub mod seed;
pub mod similarity;
pub mod stub;

pub use classifier::{CentroidClassifier, SeedSource};
pub use error::{EmbeddingError, EmbeddingResult};
pub use index::{knn_vote, InMemoryVectorIndex, Neighbor, NoopVectorIndex, VectorIndex};
pub use provider::{embed_with_retry, EmbeddingProvider, RetryPolicy};
pub use seed::{load_seed_corpus, Label, SeedExample};
pub use stub::StubEmbeddingProvider;
