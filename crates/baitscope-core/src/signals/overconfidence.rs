//! Overconfidence: absolutist language, strong modals, missing hedges, and
//! unqualified prediction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{self, LexiconStore};
use crate::matcher::{count_token_hits, tokenize};
use crate::normalize::{clamp, count_to_score, effective_word_count};
use crate::types::MetricBreakdown;

static PREDICTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:will|shall|going to)\s+\w+").expect("predictive pattern"));

static PROBABILISTIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:likely|probably|perhaps|possibly|might)\b").expect("hedge pattern")
});

pub fn analyze_overconfidence(text: &str, store: &LexiconStore) -> MetricBreakdown {
    let tokens = tokenize(text);
    let wc = effective_word_count(tokens.len());

    let absolutist_lex = store.load("absolutist", lexicon::absolutist_terms);
    let hedging_lex = store.load("hedging", lexicon::hedging_terms);
    let modal_lex = store.load("strong_modals", lexicon::strong_modal_terms);

    let absolutist = count_token_hits(&tokens, &absolutist_lex.terms);
    let strong_modals = count_token_hits(&tokens, &modal_lex.terms);
    let hedging = count_token_hits(&tokens, &hedging_lex.terms);
    let predictive = PREDICTIVE.find_iter(text).count();
    // Text-global check: the branch below fires on a hedge anywhere in the
    // text, not one scoped to the predictive clause.
    let probabilistic = PROBABILISTIC.find_iter(text).count();

    let s_absolutist = count_to_score(absolutist as f32, 2.0, 6.0);
    let s_strong_modals = count_to_score(strong_modals as f32, 1.0, 4.0);
    let s_hedging_absence = clamp(1.0 - hedging as f32 / (wc * 0.05).max(1.0));
    let s_predictive = if predictive > 0 && probabilistic == 0 {
        clamp(predictive as f32 / (wc / 20.0).max(1.0))
    } else {
        clamp(predictive as f32 / (wc / 15.0).max(2.0))
    };

    MetricBreakdown::from_parts(&[
        ("absolutist", s_absolutist),
        ("strong_modals", s_strong_modals),
        ("hedging_absence", s_hedging_absence),
        ("predictive_unqualified", s_predictive),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutist_unhedged_text_scores_high() {
        let r = analyze_overconfidence(
            "This will always work. Everyone must accept it. It is absolutely guaranteed and \
             will never fail. You cannot argue.",
            &LexiconStore::builtin(),
        );
        assert!(r.score >= 0.5);
        assert!(r.breakdown["absolutist"] > 0.0);
        assert!(r.breakdown["strong_modals"] > 0.0);
    }

    #[test]
    fn hedged_text_scores_lower() {
        let store = LexiconStore::builtin();
        let confident = analyze_overconfidence(
            "This will definitely transform the market and will dominate every competitor.",
            &store,
        );
        let hedged = analyze_overconfidence(
            "This might possibly help the market, and could perhaps affect some competitors.",
            &store,
        );
        assert!(hedged.score < confident.score);
    }

    #[test]
    fn probabilistic_hedge_reduces_predictive_subscore() {
        let store = LexiconStore::builtin();
        let bare = analyze_overconfidence("Prices will rise sharply next year.", &store);
        let hedged = analyze_overconfidence("Prices will likely rise sharply next year.", &store);
        assert!(
            hedged.breakdown["predictive_unqualified"] < bare.breakdown["predictive_unqualified"]
        );
    }

    #[test]
    fn empty_text_does_not_panic() {
        let r = analyze_overconfidence("", &LexiconStore::builtin());
        assert!(r.score >= 0.0 && r.score <= 1.0);
    }
}
