//! Lexicon loading, parsing, and the process-lifetime cache.
//!
//! Vocabulary files are plain UTF-8, one term or phrase per line. Lines are
//! trimmed and lowercased; blank lines and `#` comments are skipped. A term
//! may carry a tier annotation `term:N` with N in {1,2,3}, mapping to the
//! weights {1.0, 1.3, 1.6}. Out-of-range tiers degrade to 1.0 without
//! error; a non-numeric suffix is not a tier, so the colon stays part of
//! the phrase.
//!
//! Missing files never fail: every call site supplies a built-in default set
//! so the scorer works with zero external data files. The loader reports
//! which of the three outcomes happened ([`LoadOutcome`]) so callers can log
//! without changing the default-safe behavior.

mod defaults;
mod nrc;
mod store;

pub use defaults::*;
pub use nrc::parse_nrc_emotion;
pub use store::{LexiconStore, LoadedLexicon};

use std::collections::{HashMap, HashSet};

use tracing::{trace, warn};

/// Weight assigned to each tier annotation. Index 0 is tier 1.
const TIER_WEIGHTS: [f32; 3] = [1.0, 1.3, 1.6];

/// How a lexicon was obtained at the loader boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Parsed from the named vocabulary file.
    Loaded,
    /// File missing or parsed empty; built-in default substituted.
    Defaulted,
    /// File missing and no non-empty default available.
    Empty,
}

/// Immutable term-to-weight mapping. Unannotated terms weigh 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    weights: HashMap<String, f32>,
}

impl Lexicon {
    /// Build from explicit (term, weight) pairs. Terms are lowercased.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        Self {
            weights: pairs
                .into_iter()
                .map(|(t, w)| (t.as_ref().to_lowercase(), w))
                .collect(),
        }
    }

    /// Build a presence-only lexicon where every term weighs 1.0.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_pairs(terms.into_iter().map(|t| (t, 1.0)))
    }

    /// Weight for a term, 0.0 when absent.
    pub fn weight(&self, term: &str) -> f32 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Iterate over terms (phrases included).
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Merge `other` over `self`: overlapping terms take `other`'s weight.
    pub fn merged_with(&self, other: &Lexicon) -> Lexicon {
        let mut weights = self.weights.clone();
        weights.extend(other.weights.iter().map(|(k, v)| (k.clone(), *v)));
        Lexicon { weights }
    }
}

/// Category-name to term-set mapping assembled from `#` section headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionedLexicon {
    sections: HashMap<String, HashSet<String>>,
}

impl SectionedLexicon {
    pub fn get(&self, category: &str) -> Option<&HashSet<String>> {
        self.sections.get(category)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Recognized section headers for the urgency lexicon, matched by substring
/// against lowercased `#` lines.
const SECTION_MARKERS: [(&str, &str); 3] = [
    ("time pressure", "time_pressure"),
    ("scarcity", "scarcity"),
    ("fomo", "fomo"),
];

/// Parse a flat, optionally tier-annotated vocabulary file.
pub fn parse_lexicon(content: &str) -> Lexicon {
    let mut weights = HashMap::new();
    for raw in content.lines() {
        let line = raw.trim().to_lowercase();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (term, weight) = match line.rsplit_once(':') {
            Some((head, tail)) => match tail.trim().parse::<usize>() {
                Ok(n @ 1..=3) => (head.trim().to_string(), TIER_WEIGHTS[n - 1]),
                Ok(tier) => {
                    warn!(term = %head, tier, "lexicon tier out of range, defaulting to 1.0");
                    (head.trim().to_string(), 1.0)
                }
                // Suffix is not a number, so the colon belongs to the phrase.
                Err(_) => (line.clone(), 1.0),
            },
            None => (line.clone(), 1.0),
        };
        if !term.is_empty() {
            weights.insert(term, weight);
        }
    }
    Lexicon { weights }
}

/// Parse a sectioned vocabulary file.
///
/// A `#` line that contains a recognized marker opens that section. Any
/// other `#` line clears the current section, so terms that follow it are
/// dropped until the next recognized header. That drop is intentional and
/// silent; it mirrors the historical file format.
pub fn parse_sectioned(content: &str) -> SectionedLexicon {
    let mut sections: HashMap<String, HashSet<String>> = HashMap::new();
    let mut current: Option<&str> = None;
    for raw in content.lines() {
        let line = raw.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('#') {
            current = SECTION_MARKERS
                .iter()
                .find(|(marker, _)| header.contains(marker))
                .map(|(_, key)| *key);
            continue;
        }
        match current {
            Some(key) => {
                sections.entry(key.to_string()).or_default().insert(line);
            }
            None => trace!(term = %line, "term outside any recognized section, dropped"),
        }
    }
    SectionedLexicon { sections }
}
