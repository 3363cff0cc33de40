//! Evidence density, inverted: sparse sourcing scores high.
//!
//! Three regex families count citations, statistics, and external sourcing.
//! Each count is normalized against a word-count scale and inverted, so a
//! long text with no citations approaches 1 and a well-sourced text falls
//! toward 0.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{clamp, effective_word_count};
use crate::types::MetricBreakdown;

static CITATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\[\s*\d+\s*\]",
        r"\(\s*[Ss]ource\s*[:\s]",
        r"\([A-Za-z]+\s+et\s+al\.?\s*\d{4}\)",
        r"\d+\s*%\s*(?:of|from)",
        r"(?i)\bpeer-reviewed\b",
        r"(?i)\bconfidence interval\b",
        r"(?i)\bappendix\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("citation pattern"))
    .collect()
});

static STATS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+\.?\d*\s*%",
        r"\d{1,3}(?:,\d{3})*(?:\.\d+)?\s*(?:people|users|studies|percent)",
        r"(?i)\d{1,3}(?:,\d{3})*(?:\.\d+)?\s+(?:participants|patients|respondents|trials?)",
        r"\d+\s*(?:million|billion|thousand)",
        r"study\s+(?:shows|found|reveals)",
        r"research\s+(?:shows|indicates|suggests)",
        r"(?i)\b(?:data|analysis|evidence|findings)\s+(?:suggests|indicates|shows)\b",
        r"(?i)\bstatistically significant\b",
        r"(?i)\bmodest benefits?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("stats pattern"))
    .collect()
});

static EXTERNAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"https?://\S+",
        r"according\s+to\s+\w+",
        r"(?:study|research|report|survey)\s+(?:by|from|at)",
        r"(?i)\breview of\b",
        r"(?i)\bauthors?\s+(?:noted|note|caution|cautioned)\b",
        r"(?i)\bthe\s+(?:memo|report|study|paper|guidance|committee report)\s+(?:recommends|states|found|describes|used)\b",
        r"(?i)\bmethodology\b",
        r"(?i)\bsampling\b",
        r"(?i)\blimitations?\b",
        r"(?i)\brandomized\b",
        r"(?i)\btrial\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("external pattern"))
    .collect()
});

fn count_matches(text: &str, patterns: &[Regex]) -> usize {
    patterns.iter().map(|p| p.find_iter(text).count()).sum()
}

pub fn analyze_evidence(text: &str) -> MetricBreakdown {
    let citations = count_matches(text, &CITATION_PATTERNS);
    let stats = count_matches(text, &STATS_PATTERNS);
    let external = count_matches(text, &EXTERNAL_PATTERNS);

    let words = effective_word_count(text.split_whitespace().count());
    // One evidence marker per ~30 words counts as fully sourced.
    let scale = (words / 30.0).max(1.0);

    let c_norm = clamp(1.0 - (citations as f32 / scale).min(1.0));
    let s_norm = clamp(1.0 - (stats as f32 / scale).min(1.0));
    let e_norm = clamp(1.0 - (external as f32 / scale).min(1.0));

    MetricBreakdown::from_parts(&[
        ("citations", c_norm),
        ("stats", s_norm),
        ("external_sources", e_norm),
    ])
}
