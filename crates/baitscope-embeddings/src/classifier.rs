//! Centroid-similarity classifier.
//!
//! On first use, embeds every seed example and computes one mean vector per
//! label. Initialization is all-or-nothing: if any seed fails to embed, no
//! centroid is stored and the classifier reports unavailable — both
//! centroids are set together or neither is. The computed pair is cached
//! for the classifier's lifetime; concurrent first calls are serialized by
//! the cell.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::provider::{embed_with_retry, EmbeddingProvider, RetryPolicy};
use crate::seed::{load_seed_corpus, Label, SeedExample};
use crate::similarity::{cosine_similarity, mean_vector};

/// Where the classifier finds its seed examples.
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// JSON file of `{text, label}` objects.
    Path(PathBuf),
    /// Preloaded examples (tests, embedded corpora).
    Inline(Vec<SeedExample>),
}

#[derive(Debug, Clone)]
struct Centroids {
    bait: Vec<f32>,
    neutral: Vec<f32>,
}

/// Scores query embeddings by similarity difference against the bait and
/// neutral centroids.
pub struct CentroidClassifier {
    provider: Arc<dyn EmbeddingProvider>,
    source: SeedSource,
    retry: RetryPolicy,
    centroids: OnceCell<Option<Centroids>>,
}

impl CentroidClassifier {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, source: SeedSource) -> Self {
        Self {
            provider,
            source,
            retry: RetryPolicy::default(),
            centroids: OnceCell::new(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Score a query embedding in [0, 1]; higher means closer to the bait
    /// centroid. Errors mean "no signal", never a partial score.
    pub async fn score(&self, embedding: &[f32]) -> EmbeddingResult<f32> {
        let centroids = self
            .centroids
            .get_or_init(|| self.compute_centroids())
            .await
            .as_ref()
            .ok_or(EmbeddingError::Unavailable)?;

        let sim_bait = cosine_similarity(embedding, &centroids.bait);
        let sim_neutral = cosine_similarity(embedding, &centroids.neutral);
        Ok(((sim_bait - sim_neutral + 1.0) / 2.0).clamp(0.0, 1.0))
    }

    async fn compute_centroids(&self) -> Option<Centroids> {
        let examples = match &self.source {
            SeedSource::Inline(examples) => examples.clone(),
            SeedSource::Path(path) => match load_seed_corpus(path) {
                Ok(examples) => examples,
                Err(err) => {
                    warn!(error = %err, "seed corpus unavailable, centroid scoring disabled");
                    return None;
                }
            },
        };

        let mut bait = Vec::new();
        let mut neutral = Vec::new();
        for example in &examples {
            match embed_with_retry(self.provider.as_ref(), &example.text, &self.retry).await {
                Ok(vector) => match example.label {
                    Label::Bait => bait.push(vector),
                    Label::Neutral => neutral.push(vector),
                },
                Err(err) => {
                    // All-or-nothing: one failed seed poisons the whole init.
                    warn!(error = %err, "seed embedding failed, centroid scoring disabled");
                    return None;
                }
            }
        }

        let centroids = Centroids {
            bait: mean_vector(&bait)?,
            neutral: mean_vector(&neutral)?,
        };
        debug!(
            bait_seeds = bait.len(),
            neutral_seeds = neutral.len(),
            "centroids initialized"
        );
        Some(centroids)
    }
}
