//! In-group/out-group framing: us/them pronoun pressure plus tribal labels.

use once_cell::sync::Lazy;

use crate::lexicon::{self, Lexicon, LexiconStore};
use crate::matcher::tokenize;
use crate::normalize::count_to_score;
use crate::types::MetricBreakdown;

static US_THEM: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::from_terms(["we", "they", "us", "them", "our", "their"]));

pub fn analyze_ingroup(text: &str, store: &LexiconStore) -> MetricBreakdown {
    let tokens = tokenize(text);
    let tribal_lex = store.load("ingroup", lexicon::ingroup_terms);

    let us_them = tokens.iter().filter(|t| US_THEM.contains(t)).count();
    // Pronouns are excluded from the tribal count even when the custom
    // lexicon lists them.
    let tribal = tokens
        .iter()
        .filter(|t| tribal_lex.terms.contains(t) && !US_THEM.contains(t))
        .count();

    let s_us_them = count_to_score(us_them as f32, 2.0, 8.0);
    let s_tribal = count_to_score(tribal as f32, 1.0, 5.0);

    MetricBreakdown::from_parts(&[
        ("us_them_markers", s_us_them),
        ("tribal_language", s_tribal),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tribal_text_scores_high() {
        let r = analyze_ingroup(
            "We know what they want. They lie to us while our families suffer and their \
             friends profit. The elites and globalists and traitors laugh at the patriots.",
            &LexiconStore::builtin(),
        );
        assert!(r.score >= 0.5);
        assert!(r.breakdown["us_them_markers"] > 0.0);
        assert!(r.breakdown["tribal_language"] > 0.0);
    }

    #[test]
    fn neutral_text_scores_zero() {
        let r = analyze_ingroup(
            "The report describes the updated process for submitting expense claims.",
            &LexiconStore::builtin(),
        );
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn pronouns_do_not_double_count_as_tribal() {
        let dir = tempfile::tempdir().unwrap();
        // A custom tribal lexicon that (incorrectly) includes a pronoun.
        std::fs::write(dir.path().join("ingroup.txt"), "they\nelites\n").unwrap();
        let store = LexiconStore::new(dir.path());
        let r = analyze_ingroup("they and the elites", &store);
        // "they" feeds only the pronoun count; one tribal hit is at the low
        // threshold and scores 0.
        assert_eq!(r.breakdown["tribal_language"], 0.0);
    }
}
