//! Response types shared by the deterministic layer and the aggregator.
//!
//! Every type here is created fresh per analysis call and never mutated after
//! construction. Nothing is persisted between requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Score plus named sub-score breakdown for a single signal.
///
/// Invariants: `score` and every breakdown value lie in [0, 1] and are
/// rounded to 2 decimals at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBreakdown {
    /// Combined signal score in [0, 1].
    pub score: f32,
    /// Named sub-scores that were averaged into `score`.
    /// BTreeMap keeps serialized output deterministic.
    pub breakdown: BTreeMap<String, f32>,
}

impl MetricBreakdown {
    /// Build a breakdown from (name, sub-score) pairs, averaging them into
    /// the combined score. Sub-scores are clamped here; rounding happens
    /// only at this boundary, so the mean is taken over unrounded values.
    pub fn from_parts(parts: &[(&str, f32)]) -> Self {
        let clamped: Vec<(&str, f32)> = parts
            .iter()
            .map(|(k, v)| (*k, crate::normalize::clamp(*v)))
            .collect();
        let score = if clamped.is_empty() {
            0.0
        } else {
            clamped.iter().map(|(_, v)| v).sum::<f32>() / clamped.len() as f32
        };
        Self {
            score: crate::normalize::round2(score),
            breakdown: clamped
                .iter()
                .map(|(k, v)| ((*k).to_string(), crate::normalize::round2(*v)))
                .collect(),
        }
    }
}

/// Which optional mechanism produced the embedding score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Embedding layer did not run or failed.
    #[default]
    None,
    /// Centroid-similarity score over the seed corpus.
    Centroid,
    /// k-NN vote from a vector index.
    Index,
}

/// Metadata describing which optional scoring path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMeta {
    /// Whether the caller explicitly requested the embedding layer.
    /// `None` means "decide from provider availability".
    pub requested: Option<bool>,
    /// Whether the embedding layer actually ran.
    pub used: bool,
    /// Whether an embedding provider was configured and reachable.
    pub provider_available: bool,
    /// Which backend produced `engagement_bait_score`.
    pub backend: EmbeddingBackend,
}

/// Composite result of one analysis: all eight deterministic signals plus
/// the optional embedding score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub urgency_pressure: MetricBreakdown,
    pub evidence_density: MetricBreakdown,
    pub overconfidence: MetricBreakdown,
    pub arousal_intensity: MetricBreakdown,
    pub ingroup_outgroup: MetricBreakdown,
    pub narrative_simplification: MetricBreakdown,
    pub claim_volume_vs_depth: MetricBreakdown,
    pub lexical_diversity: MetricBreakdown,
    /// Embedding-similarity score, `None` when the embedding layer did not
    /// produce a value. Callers must distinguish this from a score of 0.
    pub engagement_bait_score: Option<f32>,
    pub meta: AnalysisMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_averages_and_clamps() {
        let mb = MetricBreakdown::from_parts(&[("a", 0.5), ("b", 1.0)]);
        assert_eq!(mb.score, 0.75);
        assert_eq!(mb.breakdown["a"], 0.5);
        assert_eq!(mb.breakdown["b"], 1.0);
    }

    #[test]
    fn from_parts_rounds_once_at_the_boundary() {
        // Mean of the raw values (0.0045 -> 0.0), not of the rounded
        // breakdown entries (0.01 and 0.0 -> 0.01).
        let mb = MetricBreakdown::from_parts(&[("a", 0.005), ("b", 0.004)]);
        assert_eq!(mb.score, 0.0);
        assert_eq!(mb.breakdown["a"], 0.01);
        assert_eq!(mb.breakdown["b"], 0.0);
    }

    #[test]
    fn from_parts_empty_is_zero() {
        let mb = MetricBreakdown::from_parts(&[]);
        assert_eq!(mb.score, 0.0);
        assert!(mb.breakdown.is_empty());
    }

    #[test]
    fn backend_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EmbeddingBackend::Centroid).unwrap(),
            "\"centroid\""
        );
        assert_eq!(
            serde_json::to_string(&EmbeddingBackend::None).unwrap(),
            "\"none\""
        );
    }

    #[test]
    fn meta_roundtrip() {
        let meta = AnalysisMeta {
            requested: Some(true),
            used: false,
            provider_available: false,
            backend: EmbeddingBackend::None,
        };
        let json = serde_json::to_string(&meta).unwrap();
        let restored: AnalysisMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, restored);
    }
}
