//! Token and phrase matching with negation lookback and degree modifiers.
//!
//! Token hits are weight-scaled and context-aware: a hit is voided when a
//! negation appears in the preceding window, and scaled when an amplifier or
//! diminisher sits directly before it. Phrase hits are plain substring
//! containment on the lowercased text; window-based negation over multi-word
//! spans is not computed.

use std::collections::HashSet;

use crate::lexicon::Lexicon;

/// Tokens scanned backwards for a negation before a hit.
pub const NEGATION_WINDOW: usize = 3;

/// Tokens scanned backwards for a degree modifier before a hit.
const MODIFIER_WINDOW: usize = 2;

const AMPLIFIER_FACTOR: f32 = 1.3;
const DIMINISHER_FACTOR: f32 = 0.7;

const NEGATIONS: [&str; 12] = [
    "not", "no", "never", "without", "nobody", "nothing", "neither", "nor", "hardly", "barely",
    "seldom", "rarely",
];

const AMPLIFIERS: [&str; 12] = [
    "very",
    "extremely",
    "absolutely",
    "incredibly",
    "totally",
    "completely",
    "utterly",
    "really",
    "so",
    "deeply",
    "highly",
    "truly",
];

const DIMINISHERS: [&str; 8] = [
    "slightly",
    "somewhat",
    "fairly",
    "rather",
    "mildly",
    "marginally",
    "occasionally",
    "moderately",
];

/// Strip trailing sentence punctuation from a token.
#[inline]
pub fn strip_trailing_punct(token: &str) -> &str {
    token.trim_end_matches(['.', ',', ';', ':', '!', '?'])
}

/// Lowercase whitespace tokens with trailing punctuation stripped.
///
/// Tokens that were pure punctuation become empty strings and are kept, so
/// the stream length matches the whitespace word count used for densities.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| strip_trailing_punct(w).to_string())
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

/// Whether the token at `index` sits within [`NEGATION_WINDOW`] tokens of a
/// negation.
pub fn is_negated(tokens: &[String], index: usize) -> bool {
    let start = index.saturating_sub(NEGATION_WINDOW);
    tokens[start..index].iter().any(|t| is_negation(t))
}

/// Degree-modifier factor from the tokens directly preceding `index`.
/// Amplifier wins when both an amplifier and a diminisher are in range.
pub fn degree_modifier(tokens: &[String], index: usize) -> f32 {
    let start = index.saturating_sub(MODIFIER_WINDOW);
    let window = &tokens[start..index];
    if window.iter().any(|t| AMPLIFIERS.contains(&t.as_str())) {
        AMPLIFIER_FACTOR
    } else if window.iter().any(|t| DIMINISHERS.contains(&t.as_str())) {
        DIMINISHER_FACTOR
    } else {
        1.0
    }
}

/// Accumulate lexicon weights over the token stream, voiding negated hits
/// and scaling the rest by nearby degree modifiers.
pub fn count_weighted(tokens: &[String], lexicon: &Lexicon) -> f32 {
    let mut total = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        let base = lexicon.weight(token);
        if base > 0.0 && !is_negated(tokens, i) {
            total += base * degree_modifier(tokens, i);
        }
    }
    total
}

/// Plain membership count over the token stream, no negation or scaling.
pub fn count_token_hits(tokens: &[String], lexicon: &Lexicon) -> usize {
    tokens.iter().filter(|t| lexicon.contains(t)).count()
}

/// Count lexicon phrases contained in the lowercased text. Each phrase
/// counts at most once regardless of repetitions.
pub fn count_phrases<'a>(text_lower: &str, phrases: impl IntoIterator<Item = &'a str>) -> usize {
    phrases
        .into_iter()
        .filter(|p| text_lower.contains(p))
        .count()
}

/// Distinct marker count mixing token terms and multi-word phrases.
/// Single-word terms match against the token set; phrases match by
/// containment. Each term counts at most once.
pub fn count_distinct_markers(text_lower: &str, tokens: &[String], lexicon: &Lexicon) -> usize {
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    lexicon
        .terms()
        .filter(|term| {
            if term.contains(' ') {
                text_lower.contains(term)
            } else {
                token_set.contains(term)
            }
        })
        .count()
}

/// Count fully-uppercase words of more than two characters, using the
/// original-case text.
pub fn caps_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| {
            let mut has_cased = false;
            for c in w.chars() {
                if c.is_lowercase() {
                    return false;
                }
                if c.is_uppercase() {
                    has_cased = true;
                }
            }
            has_cased && w.chars().count() > 2
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(terms: &[&str]) -> Lexicon {
        Lexicon::from_terms(terms.iter().copied())
    }

    #[test]
    fn tokenize_strips_trailing_punct() {
        let tokens = tokenize("Act now! Don't wait,");
        assert_eq!(tokens, vec!["act", "now", "don't", "wait"]);
    }

    #[test]
    fn negation_voids_hit() {
        let plain = tokenize("this is urgent");
        let negated = tokenize("this is not urgent");
        let lexicon = lex(&["urgent"]);
        assert!(count_weighted(&plain, &lexicon) > 0.0);
        assert_eq!(count_weighted(&negated, &lexicon), 0.0);
    }

    #[test]
    fn contraction_counts_as_negation() {
        let tokens = tokenize("this isn't urgent at all");
        assert_eq!(count_weighted(&tokens, &lex(&["urgent"])), 0.0);
    }

    #[test]
    fn negation_window_is_bounded() {
        // Negation four tokens back is out of the window.
        let tokens = tokenize("not one bit of this urgent");
        assert!(count_weighted(&tokens, &lex(&["urgent"])) > 0.0);
    }

    #[test]
    fn amplifier_scales_up() {
        let plain = tokenize("an urgent matter");
        let amped = tokenize("an extremely urgent matter");
        let lexicon = lex(&["urgent"]);
        assert!(count_weighted(&amped, &lexicon) > count_weighted(&plain, &lexicon));
        assert!((count_weighted(&amped, &lexicon) - 1.3).abs() < 1e-6);
    }

    #[test]
    fn diminisher_scales_down() {
        let plain = tokenize("an urgent matter");
        let dimmed = tokenize("a somewhat urgent matter");
        let lexicon = lex(&["urgent"]);
        assert!(count_weighted(&dimmed, &lexicon) < count_weighted(&plain, &lexicon));
        assert!((count_weighted(&dimmed, &lexicon) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn amplifier_wins_over_diminisher() {
        let tokens = tokenize("somewhat very urgent");
        assert!((count_weighted(&tokens, &lex(&["urgent"])) - 1.3).abs() < 1e-6);
    }

    #[test]
    fn weighted_terms_accumulate() {
        let lexicon = Lexicon::from_pairs([("fury", 1.6), ("angry", 1.0)]);
        let tokens = tokenize("fury and angry words");
        assert!((count_weighted(&tokens, &lexicon) - 2.6).abs() < 1e-6);
    }

    #[test]
    fn phrases_count_once_each() {
        let n = count_phrases(
            "act now, act now, limited time",
            ["act now", "limited time", "last chance"],
        );
        assert_eq!(n, 2);
    }

    #[test]
    fn distinct_markers_mix_tokens_and_phrases() {
        let text = "however, it depends. depending on cost, however.";
        let tokens = tokenize(text);
        let lexicon = lex(&["however", "depending on", "unless"]);
        assert_eq!(count_distinct_markers(text, &tokens, &lexicon), 2);
    }

    #[test]
    fn caps_words_need_three_chars() {
        // "I" and "AM" are too short to count.
        assert_eq!(caps_word_count("I AM VERY ANGRY"), 2);
        assert_eq!(caps_word_count("ok then"), 0);
        // Punctuation does not break the uppercase check.
        assert_eq!(caps_word_count("EVIL!"), 1);
    }
}
