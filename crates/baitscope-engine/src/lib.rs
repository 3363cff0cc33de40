//! Baitscope Engine
//!
//! The aggregator. [`Analyzer`] runs the eight deterministic signal
//! extractors unconditionally, then the embedding layer best-effort: a
//! vector-index k-NN vote when a populated index is configured, otherwise
//! centroid similarity, otherwise nothing. An embedding failure never
//! affects the deterministic scores — it surfaces as a `None` score with
//! backend `"none"` in the response metadata.

mod analyzer;
mod config;

pub use analyzer::Analyzer;
pub use config::EngineConfig;

// Re-export the response types callers consume.
pub use baitscope_core::types::{AnalysisMeta, AnalysisResult, EmbeddingBackend, MetricBreakdown};
