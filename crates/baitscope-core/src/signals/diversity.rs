//! Lexical diversity, inverted: repetitive vocabulary reads as bait.
//!
//! Uses the Moving-Average Type-Token Ratio (MATTR), which slides a window
//! across the token stream and averages the unique-token ratio at each
//! position. Unlike the raw type-token ratio, MATTR is length-invariant.

use std::collections::HashMap;

use crate::normalize::{clamp, round2};
use crate::types::MetricBreakdown;

const BASE_WINDOW: usize = 40;
const MIN_WINDOW: usize = 10;

/// Moving-Average Type-Token Ratio over the token stream.
///
/// The window is `min(40, max(10, n/2))`. Texts shorter than two windows
/// fall back to the plain type-token ratio.
fn mattr(tokens: &[String]) -> f32 {
    let n = tokens.len();
    if n == 0 {
        return 0.0;
    }
    let window = BASE_WINDOW.min(MIN_WINDOW.max(n / 2));
    if n < window * 2 {
        let unique: std::collections::HashSet<&str> =
            tokens.iter().map(String::as_str).collect();
        return unique.len() as f32 / n as f32;
    }

    // Rolling distinct count: one pass instead of a set per window position.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut distinct = 0usize;
    let mut ratio_sum = 0.0f32;
    for (i, token) in tokens.iter().enumerate() {
        let entry = counts.entry(token.as_str()).or_insert(0);
        if *entry == 0 {
            distinct += 1;
        }
        *entry += 1;
        if i >= window {
            let leaving = tokens[i - window].as_str();
            let left = counts.get_mut(leaving).expect("token left the window");
            *left -= 1;
            if *left == 0 {
                distinct -= 1;
            }
        }
        if i + 1 >= window {
            ratio_sum += distinct as f32 / window as f32;
        }
    }
    ratio_sum / (n - window + 1) as f32
}

pub fn analyze_lexical_diversity(text: &str) -> MetricBreakdown {
    // Strip punctuation and lowercase so "angry!" and "angry" are one type.
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.to_lowercase()
                .trim_end_matches(['.', ',', ';', ':', '!', '?', '"', '\''])
                .to_string()
        })
        .filter(|w| !w.is_empty())
        .collect();

    if tokens.is_empty() {
        return MetricBreakdown {
            score: 0.0,
            breakdown: [
                ("mattr".to_string(), 0.0),
                ("type_token_ratio".to_string(), 0.0),
            ]
            .into_iter()
            .collect(),
        };
    }

    let unique: std::collections::HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let ttr = unique.len() as f32 / tokens.len() as f32;
    let mattr_val = mattr(&tokens);

    MetricBreakdown {
        score: round2(clamp(1.0 - mattr_val)),
        breakdown: [
            ("mattr".to_string(), round2(mattr_val)),
            ("type_token_ratio".to_string(), round2(ttr)),
        ]
        .into_iter()
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_word_scores_near_one() {
        let text = vec!["spam"; 100].join(" ");
        let r = analyze_lexical_diversity(&text);
        assert!(r.breakdown["mattr"] <= 0.05);
        assert!(r.score >= 0.95);
    }

    #[test]
    fn all_unique_tokens_score_near_zero() {
        let text: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();
        let r = analyze_lexical_diversity(&text.join(" "));
        assert!(r.breakdown["mattr"] >= 0.95);
        assert!(r.score <= 0.05);
    }

    #[test]
    fn short_text_uses_plain_ttr() {
        // 8 tokens, window would be 10: falls back to TTR.
        let r = analyze_lexical_diversity("one two three four five six seven eight");
        assert_eq!(r.breakdown["mattr"], r.breakdown["type_token_ratio"]);
    }

    #[test]
    fn punctuation_does_not_split_types() {
        let r = analyze_lexical_diversity("angry angry! angry, angry. angry");
        assert_eq!(r.breakdown["type_token_ratio"], 0.2);
    }

    #[test]
    fn empty_text_scores_zero() {
        let r = analyze_lexical_diversity("");
        assert_eq!(r.score, 0.0);
        assert_eq!(r.breakdown["mattr"], 0.0);
    }

    #[test]
    fn mattr_window_bounds() {
        // 30 tokens: window = max(10, 15) = 15, exactly two windows, MATTR path.
        let text: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let r = analyze_lexical_diversity(&text.join(" "));
        assert!(r.breakdown["mattr"] > 0.9);
    }
}
