//! Baitscope Core Library
//!
//! Deterministic engagement-bait scoring. Given a block of text, the eight
//! signal extractors in [`signals`] each produce a [`types::MetricBreakdown`]
//! with a 0-1 score and a named sub-score breakdown:
//!
//! - urgency pressure (time pressure / scarcity / FOMO phrases)
//! - evidence density (inverted: sparse sourcing scores high)
//! - arousal intensity (emotion terms, punctuation, caps, moralizing)
//! - overconfidence (absolutist terms, unhedged prediction)
//! - in-group/out-group framing
//! - narrative simplification
//! - claim volume vs. explanation depth
//! - lexical diversity (inverted MATTR)
//!
//! All scoring is synchronous, stateless, and infallible: missing or
//! malformed lexicon files degrade to built-in defaults, never to an error.
//! The only process-lifetime state is the read-mostly lexicon cache inside
//! [`lexicon::LexiconStore`], which callers construct and inject explicitly.
//!
//! # Example
//!
//! ```
//! use baitscope_core::lexicon::LexiconStore;
//! use baitscope_core::signals::analyze_urgency;
//!
//! let store = LexiconStore::builtin();
//! let result = analyze_urgency("Act now! Limited time offer!", &store);
//! assert!(result.score >= 0.0 && result.score <= 1.0);
//! ```

pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod signals;
pub mod types;

// Re-exports for convenience
pub use lexicon::{LexiconStore, LoadOutcome};
pub use types::{AnalysisMeta, AnalysisResult, EmbeddingBackend, MetricBreakdown};
