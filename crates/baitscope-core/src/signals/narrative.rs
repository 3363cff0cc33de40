//! Narrative simplification: binary framing, single-cause claims, and the
//! absence of tradeoff or conditional language.

use crate::lexicon::{self, LexiconStore};
use crate::matcher::{count_distinct_markers, tokenize};
use crate::normalize::{clamp, count_to_score, effective_word_count};
use crate::types::MetricBreakdown;

pub fn analyze_narrative(text: &str, store: &LexiconStore) -> MetricBreakdown {
    let t = text.to_lowercase();
    let tokens = tokenize(text);
    let wc = effective_word_count(tokens.len());

    let binary_lex = store.load("binary_connectors", lexicon::binary_connector_terms);
    let single_cause_lex = store.load("single_cause", lexicon::single_cause_terms);
    let tradeoff_lex = store.load("tradeoff", lexicon::tradeoff_terms);
    let conditional_lex = store.load("conditional", lexicon::conditional_terms);

    let binary = count_distinct_markers(&t, &tokens, &binary_lex.terms);
    let single_cause = count_distinct_markers(&t, &tokens, &single_cause_lex.terms);
    let tradeoff = count_distinct_markers(&t, &tokens, &tradeoff_lex.terms);
    let conditional = count_distinct_markers(&t, &tokens, &conditional_lex.terms);

    let s_binary = count_to_score(binary as f32, 1.0, 4.0);
    let s_single_cause = count_to_score(single_cause as f32, 0.0, 2.0);
    let s_tradeoff_absence = clamp(1.0 - tradeoff as f32 / (wc / 20.0).max(1.0));
    let s_conditional_absence = clamp(1.0 - conditional as f32 / (wc / 18.0).max(1.0));

    MetricBreakdown::from_parts(&[
        ("binary_framing", s_binary),
        ("single_cause", s_single_cause),
        ("tradeoff_absence", s_tradeoff_absence),
        ("conditional_absence", s_conditional_absence),
    ])
}
