//! Arousal intensity: emotional charge across seven sub-signals.

use crate::lexicon::{self, Lexicon, LexiconStore};
use crate::matcher::{caps_word_count, count_phrases, count_weighted, tokenize};
use crate::normalize::{clamp, count_to_score, effective_word_count, length_confidence};
use crate::types::MetricBreakdown;

pub fn analyze_arousal(text: &str, store: &LexiconStore) -> MetricBreakdown {
    let t = text.to_lowercase();
    let tokens = tokenize(text);
    let wc = effective_word_count(tokens.len());
    let lc = length_confidence(tokens.len());

    // NRC words default to weight 1.0; the tiered arousal lexicon overrides
    // them where the two overlap.
    let nrc = store.nrc_arousal_words();
    let nrc_lexicon = Lexicon::from_terms(nrc.iter().map(String::as_str));
    let emotion = nrc_lexicon.merged_with(&store.load("arousal", lexicon::arousal_terms).terms);
    let emotion_weighted = count_weighted(&tokens, &emotion);

    let exclamation_density = text.matches('!').count() as f32 / wc;
    let question_density = text.matches('?').count() as f32 / wc;
    // Caps detection needs the original case; the token stream is lowercased.
    let caps_ratio = caps_word_count(text) as f32 / wc;

    let moralized = store.load("moralized", lexicon::moralized_terms);
    let superlatives = store.load("superlatives", lexicon::superlative_terms);
    let curiosity = store.load("curiosity_gap", lexicon::curiosity_gap_phrases);

    let moralized_weighted = count_weighted(&tokens, &moralized.terms);
    let superlative_weighted = count_weighted(&tokens, &superlatives.terms);
    let curiosity_hits = count_phrases(&t, curiosity.terms.terms());

    let s_emotion = count_to_score(emotion_weighted, 0.0, 6.0);
    // Density sub-scores are dampened on short texts so one punctuation mark
    // cannot saturate the signal.
    let s_exclamation = clamp((exclamation_density * 20.0).min(1.0) * lc);
    let s_question = clamp((question_density * 20.0).min(1.0) * lc);
    let s_caps = clamp((caps_ratio * 15.0).min(1.0) * lc);
    let s_moralized = count_to_score(moralized_weighted, 0.0, 4.0);
    let s_superlative = count_to_score(superlative_weighted, 0.0, 5.0);
    let s_curiosity = count_to_score(curiosity_hits as f32, 0.0, 2.0);

    MetricBreakdown::from_parts(&[
        ("emotion_words", s_emotion),
        ("exclamation_density", s_exclamation),
        ("question_density", s_question),
        ("caps_ratio", s_caps),
        ("moralized_language", s_moralized),
        ("superlative_density", s_superlative),
        ("curiosity_gap", s_curiosity),
    ])
}
