//! Seed corpus: labeled example texts used only for classifier
//! initialization. Analyzed text itself is never persisted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EmbeddingError, EmbeddingResult};

/// Classification label for seed examples and index entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Bait,
    Neutral,
}

/// One labeled seed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedExample {
    pub text: String,
    pub label: Label,
}

/// Load a seed corpus from a JSON array of `{text, label}` objects.
pub fn load_seed_corpus(path: &Path) -> EmbeddingResult<Vec<SeedExample>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| EmbeddingError::SeedCorpus(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| EmbeddingError::SeedCorpus(format!("{}: {e}", path.display())))
}
