//! Engine configuration.

use std::path::PathBuf;

use baitscope_embeddings::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for [`Analyzer`](crate::Analyzer) construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory of `<name>.txt` vocabulary files. `None` uses the built-in
    /// defaults only.
    pub lexicon_dir: Option<PathBuf>,
    /// JSON seed corpus for the centroid classifier. `None` disables the
    /// centroid path.
    pub seed_corpus: Option<PathBuf>,
    /// Neighbors consulted by the index vote.
    pub knn_k: usize,
    /// Retry behavior for embedding calls.
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon_dir: None,
            seed_corpus: None,
            knn_k: 5,
            retry: RetryPolicy::default(),
        }
    }
}
