//! Built-in fallback vocabularies.
//!
//! Every extractor supplies one of these when its vocabulary file is absent,
//! so the scorer stays functional with zero external data files.

use std::collections::HashSet;

use super::Lexicon;

fn phrase_set(terms: &[&str]) -> HashSet<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

/// Time-pressure phrases (urgency section fallback).
pub fn time_pressure_phrases() -> HashSet<String> {
    phrase_set(&[
        "act now",
        "do it now",
        "hurry",
        "limited time",
        "last chance",
        "don't miss",
        "expires soon",
        "before it's too late",
        "urgency",
        "urgent",
        "immediately",
        "right now",
        "today only",
        "ends soon",
        "final hours",
        "countdown",
        "deadline",
        "now or never",
        "must act",
    ])
}

/// Scarcity phrases (urgency section fallback).
pub fn scarcity_phrases() -> HashSet<String> {
    phrase_set(&[
        "limited",
        "exclusive",
        "only a few left",
        "sold out",
        "almost gone",
        "last remaining",
        "one of a kind",
        "rare",
        "scarce",
        "first come first served",
        "supplies limited",
    ])
}

/// Fear-of-missing-out phrases (urgency section fallback).
pub fn fomo_phrases() -> HashSet<String> {
    phrase_set(&[
        "don't miss out",
        "you'll regret",
        "everyone else is",
        "join thousands",
        "see what others are missing",
        "be the first",
        "act before everyone else",
        "limited availability",
        "going fast",
        "running out",
    ])
}

/// Tier-weighted emotion terms for the arousal extractor.
pub fn arousal_terms() -> Lexicon {
    Lexicon::from_pairs([
        // tier 3
        ("terrifying", 1.6),
        ("horrifying", 1.6),
        ("fury", 1.6),
        ("outrage", 1.6),
        ("outrageous", 1.6),
        ("devastating", 1.6),
        ("catastrophic", 1.6),
        // tier 2
        ("evil", 1.3),
        ("hate", 1.3),
        ("destroy", 1.3),
        ("disaster", 1.3),
        ("shocking", 1.3),
        ("panic", 1.3),
        ("disgusting", 1.3),
        ("vile", 1.3),
        ("enraged", 1.3),
        ("terrified", 1.3),
        // tier 1
        ("angry", 1.0),
        ("fear", 1.0),
        ("afraid", 1.0),
        ("scared", 1.0),
        ("awful", 1.0),
        ("horrible", 1.0),
        ("insane", 1.0),
        ("crazy", 1.0),
        ("unbelievable", 1.0),
        ("shame", 1.0),
    ])
}

/// Moral-judgment terms for the arousal extractor.
pub fn moralized_terms() -> Lexicon {
    Lexicon::from_terms([
        "wrong",
        "evil",
        "traitor",
        "betray",
        "sin",
        "corrupt",
        "immoral",
        "disgrace",
        "shameful",
        "outrage",
        "outrageous",
        "vile",
        "wicked",
    ])
}

/// Superlatives for the arousal extractor.
pub fn superlative_terms() -> Lexicon {
    Lexicon::from_terms([
        "best",
        "worst",
        "most",
        "least",
        "incredible",
        "astonishing",
        "unbelievable",
        "shocking",
    ])
}

/// Curiosity-gap phrases for the arousal extractor.
pub fn curiosity_gap_phrases() -> Lexicon {
    Lexicon::from_terms([
        "you won't believe",
        "what happened next",
        "will shock you",
        "doctors hate",
        "this one trick",
        "you'll never guess",
        "wait until you see",
        "the truth about",
    ])
}

/// Absolutist terms for the overconfidence extractor.
pub fn absolutist_terms() -> Lexicon {
    Lexicon::from_terms([
        "always",
        "never",
        "guaranteed",
        "definitely",
        "absolutely",
        "every",
        "everyone",
        "undeniable",
        "certainly",
    ])
}

/// Hedging terms for the overconfidence extractor.
pub fn hedging_terms() -> Lexicon {
    Lexicon::from_terms([
        "may", "might", "could", "possibly", "perhaps", "likely", "probably", "seems",
        "appears",
    ])
}

/// Strong modal verbs for the overconfidence extractor.
pub fn strong_modal_terms() -> Lexicon {
    Lexicon::from_terms(["must", "will", "shall", "cannot", "can't", "won't"])
}

/// Tribal terms for the in-group/out-group extractor. Us/them pronouns are
/// counted separately and excluded from this set at match time.
pub fn ingroup_terms() -> Lexicon {
    Lexicon::from_terms([
        "patriot",
        "patriots",
        "traitor",
        "traitors",
        "elite",
        "elites",
        "globalists",
        "sheeple",
        "woke",
        "radical",
        "radicals",
        "cronies",
        "establishment",
    ])
}

/// Binary-framing connectors for the narrative extractor.
pub fn binary_connector_terms() -> Lexicon {
    Lexicon::from_terms([
        "either",
        "or else",
        "the only way",
        "no other option",
        "no alternative",
        "black and white",
        "plain and simple",
        "it's that simple",
        "simple as that",
        "end of story",
    ])
}

/// Single-cause markers for the narrative extractor.
pub fn single_cause_terms() -> Lexicon {
    Lexicon::from_terms([
        "the real reason",
        "the only reason",
        "all comes down to",
        "boils down to",
        "the root cause",
        "simply because",
        "the one thing",
    ])
}

/// Tradeoff acknowledgment terms for the narrative extractor.
pub fn tradeoff_terms() -> Lexicon {
    Lexicon::from_terms([
        "however",
        "although",
        "trade-off",
        "tradeoff",
        "on the other hand",
        "nevertheless",
        "that said",
        "granted",
    ])
}

/// Conditional/qualifier terms for the narrative extractor.
pub fn conditional_terms() -> Lexicon {
    Lexicon::from_terms([
        "if",
        "when",
        "unless",
        "depending on",
        "in some cases",
        "sometimes",
        "assuming",
    ])
}
