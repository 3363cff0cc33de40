//! The analysis orchestrator.

use std::sync::Arc;

use tracing::debug;

use baitscope_core::lexicon::LexiconStore;
use baitscope_core::signals::{
    analyze_arousal, analyze_claim_volume, analyze_evidence, analyze_ingroup,
    analyze_lexical_diversity, analyze_narrative, analyze_overconfidence, analyze_urgency,
};
use baitscope_core::types::{AnalysisMeta, AnalysisResult, EmbeddingBackend};
use baitscope_embeddings::{
    embed_with_retry, knn_vote, CentroidClassifier, EmbeddingProvider, SeedSource, VectorIndex,
};

use crate::EngineConfig;

/// Scores texts for engagement-bait structure.
///
/// Construction wires the dependency-injected pieces together: the lexicon
/// store (always), and optionally an embedding provider, a seed-corpus
/// classifier, and a vector index. Per-call state is never shared, so a
/// text scores identically alone or inside a batch.
pub struct Analyzer {
    lexicons: LexiconStore,
    provider: Option<Arc<dyn EmbeddingProvider>>,
    classifier: Option<CentroidClassifier>,
    index: Option<Arc<dyn VectorIndex>>,
    config: EngineConfig,
}

impl Analyzer {
    /// Deterministic-only analyzer; the embedding layer stays disabled
    /// until a provider is attached.
    pub fn new(config: EngineConfig) -> Self {
        let lexicons = match &config.lexicon_dir {
            Some(dir) => LexiconStore::new(dir),
            None => LexiconStore::builtin(),
        };
        Self {
            lexicons,
            provider: None,
            classifier: None,
            index: None,
            config,
        }
    }

    /// Attach an embedding provider. When the config names a seed corpus,
    /// this also enables the centroid classifier.
    pub fn with_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        if let Some(path) = &self.config.seed_corpus {
            self.classifier = Some(
                CentroidClassifier::new(Arc::clone(&provider), SeedSource::Path(path.clone()))
                    .with_retry_policy(self.config.retry.clone()),
            );
        }
        self.provider = Some(provider);
        self
    }

    /// Attach a provider with an explicit seed corpus, bypassing the
    /// configured path.
    pub fn with_provider_and_seeds(
        mut self,
        provider: Arc<dyn EmbeddingProvider>,
        seeds: Vec<baitscope_embeddings::SeedExample>,
    ) -> Self {
        self.classifier = Some(
            CentroidClassifier::new(Arc::clone(&provider), SeedSource::Inline(seeds))
                .with_retry_policy(self.config.retry.clone()),
        );
        self.provider = Some(provider);
        self
    }

    /// Attach a vector index. A ready index takes precedence over the
    /// centroid classifier.
    pub fn with_index(mut self, index: Arc<dyn VectorIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Analyze one text.
    ///
    /// `requested` is the caller's tristate for the embedding layer:
    /// `Some(true)`/`Some(false)` force it, `None` defers to provider
    /// availability. The deterministic extractors always run.
    pub async fn analyze(&self, text: &str, requested: Option<bool>) -> AnalysisResult {
        let provider_available = self
            .provider
            .as_ref()
            .map(|p| p.is_available())
            .unwrap_or(false);
        // Effective flag: explicit request wins, otherwise follow
        // availability. A request cannot force an unreachable provider.
        let used = requested.unwrap_or(provider_available) && provider_available;

        let (engagement_bait_score, backend) = if used {
            self.embedding_score(text).await
        } else {
            (None, EmbeddingBackend::None)
        };

        AnalysisResult {
            urgency_pressure: analyze_urgency(text, &self.lexicons),
            evidence_density: analyze_evidence(text),
            overconfidence: analyze_overconfidence(text, &self.lexicons),
            arousal_intensity: analyze_arousal(text, &self.lexicons),
            ingroup_outgroup: analyze_ingroup(text, &self.lexicons),
            narrative_simplification: analyze_narrative(text, &self.lexicons),
            claim_volume_vs_depth: analyze_claim_volume(text),
            lexical_diversity: analyze_lexical_diversity(text),
            engagement_bait_score,
            meta: AnalysisMeta {
                requested,
                used,
                provider_available,
                backend,
            },
        }
    }

    /// Analyze texts in order. Results are position-stable and independent:
    /// no per-text state crosses between items.
    pub async fn analyze_batch(
        &self,
        texts: &[String],
        requested: Option<bool>,
    ) -> Vec<AnalysisResult> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.analyze(text, requested).await);
        }
        results
    }

    /// Best-effort embedding score. Index vote wins over centroids when a
    /// populated index is configured; every failure collapses to
    /// `(None, backend none)`.
    async fn embedding_score(&self, text: &str) -> (Option<f32>, EmbeddingBackend) {
        let Some(provider) = &self.provider else {
            return (None, EmbeddingBackend::None);
        };
        let embedding = match embed_with_retry(provider.as_ref(), text, &self.config.retry).await {
            Ok(v) => v,
            Err(err) => {
                debug!(error = %err, "query embedding failed, skipping embedding score");
                return (None, EmbeddingBackend::None);
            }
        };

        if let Some(index) = &self.index {
            if index.is_ready() {
                match index.search(&embedding, self.config.knn_k).await {
                    Ok(neighbors) if !neighbors.is_empty() => {
                        return (Some(knn_vote(&neighbors)), EmbeddingBackend::Index);
                    }
                    Ok(_) => debug!("vector index returned no neighbors, falling back"),
                    Err(err) => debug!(error = %err, "vector index search failed, falling back"),
                }
            }
        }

        if let Some(classifier) = &self.classifier {
            match classifier.score(&embedding).await {
                Ok(score) => return (Some(score), EmbeddingBackend::Centroid),
                Err(err) => debug!(error = %err, "centroid scoring unavailable"),
            }
        }

        (None, EmbeddingBackend::None)
    }
}
