//! Claim volume vs. explanation depth.
//!
//! Dense assertion with short, unexplained sentences reads as bait; long
//! sentences with causal connectives read as explanation. A listicle
//! pattern, when present, contributes a third sub-score.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{clamp, effective_word_count, round2};
use crate::types::MetricBreakdown;

static CLAIM_INDICATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:is|are|was|were|will|must|should|always|never|proves?|shows?|means?|causes?|results?\s+in)\b",
    )
    .expect("claim pattern")
});

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence split"));

static LISTICLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b\d+\s+(?:reasons|ways|things|tips|tricks|secrets|facts|signs)\b",
        r"(?m)^\s*\d+[.)]\s",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("listicle pattern"))
    .collect()
});

pub fn analyze_claim_volume(text: &str) -> MetricBreakdown {
    let sentences: Vec<&str> = SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let wc = effective_word_count(text.split_whitespace().count());
    let sentence_count = sentences.len().max(1) as f32;

    let claims = sentences
        .iter()
        .filter(|s| CLAIM_INDICATORS.is_match(s))
        .count();
    let claims_per_word = claims as f32 / wc;

    let avg_sentence_len = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .sum::<usize>() as f32
        / sentence_count;
    let lower = text.to_lowercase();
    let has_causal = lower.contains("because") || lower.contains("since");
    let causal_factor = if has_causal { 0.7 } else { 0.3 };
    let explanation_depth = clamp((avg_sentence_len / 25.0).min(1.0) * causal_factor);

    let s_claims = clamp((claims_per_word * 30.0).min(1.0));
    let s_depth_inv = clamp(1.0 - explanation_depth);

    let listicle_hits: usize = LISTICLE_PATTERNS
        .iter()
        .map(|p| p.find_iter(text).count())
        .sum();

    // The mean is taken over the raw sub-scores; rounding happens once for
    // the score and once per displayed breakdown entry.
    let mut parts = vec![s_claims, s_depth_inv];
    let mut breakdown = std::collections::BTreeMap::new();
    breakdown.insert("claims_per_word".to_string(), round2(s_claims));
    breakdown.insert("explanation_depth".to_string(), round2(explanation_depth));
    if listicle_hits > 0 {
        let s_listicle = clamp(listicle_hits as f32 / 3.0);
        breakdown.insert("listicle_pattern".to_string(), round2(s_listicle));
        parts.push(s_listicle);
    }

    let score = parts.iter().sum::<f32>() / parts.len() as f32;
    MetricBreakdown {
        score: round2(clamp(score)),
        breakdown,
    }
}
