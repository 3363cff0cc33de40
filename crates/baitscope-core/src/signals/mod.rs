//! Signal extractors.
//!
//! One function per metric. Each takes the raw text plus the shared
//! [`LexiconStore`](crate::lexicon::LexiconStore) and returns a fresh
//! [`MetricBreakdown`](crate::types::MetricBreakdown). Extractors never fail
//! and share no per-call state, so results for a text are identical whether
//! it is analyzed alone or inside a batch.

mod arousal;
mod claims;
mod diversity;
mod evidence;
mod ingroup;
mod narrative;
mod overconfidence;
mod urgency;

pub use arousal::analyze_arousal;
pub use claims::analyze_claim_volume;
pub use diversity::analyze_lexical_diversity;
pub use evidence::analyze_evidence;
pub use ingroup::analyze_ingroup;
pub use narrative::analyze_narrative;
pub use overconfidence::analyze_overconfidence;
pub use urgency::analyze_urgency;
