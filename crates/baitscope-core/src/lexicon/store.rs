//! Dependency-injected lexicon cache.
//!
//! One `LexiconStore` is constructed at application startup and shared by
//! reference. Loads are cached for the store's lifetime, first-call-wins,
//! with no invalidation. Concurrent first-calls may both parse the file;
//! the duplicate work is wasted, not a correctness hazard, because parses
//! are idempotent and the cache write is a plain replace.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::debug;

use super::nrc::parse_nrc_emotion;
use super::{parse_lexicon, parse_sectioned, Lexicon, LoadOutcome, SectionedLexicon};

/// A cached lexicon together with how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedLexicon {
    pub terms: Lexicon,
    pub outcome: LoadOutcome,
}

/// Loads and caches vocabulary files from a directory, falling back to
/// caller-supplied built-in defaults when files are absent or empty.
#[derive(Debug, Default)]
pub struct LexiconStore {
    dir: Option<PathBuf>,
    plain: DashMap<String, Arc<LoadedLexicon>>,
    sectioned: DashMap<String, Arc<SectionedLexicon>>,
    nrc: OnceLock<Arc<HashSet<String>>>,
}

impl LexiconStore {
    /// Store backed by `<dir>/<name>.txt` vocabulary files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Store with no backing directory: every load uses its built-in default.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load `<name>.txt`, substituting `fallback` when the file is missing
    /// or parses to an empty set. The result is cached under `name`.
    pub fn load(&self, name: &str, fallback: impl FnOnce() -> Lexicon) -> Arc<LoadedLexicon> {
        if let Some(hit) = self.plain.get(name) {
            return Arc::clone(&hit);
        }
        let parsed = self.read_file(name).map(|content| parse_lexicon(&content));
        let loaded = match parsed {
            Some(lex) if !lex.is_empty() => LoadedLexicon {
                terms: lex,
                outcome: LoadOutcome::Loaded,
            },
            _ => {
                let default = fallback();
                let outcome = if default.is_empty() {
                    LoadOutcome::Empty
                } else {
                    LoadOutcome::Defaulted
                };
                debug!(lexicon = name, ?outcome, "vocabulary file absent or empty");
                LoadedLexicon {
                    terms: default,
                    outcome,
                }
            }
        };
        let arc = Arc::new(loaded);
        self.plain.insert(name.to_string(), Arc::clone(&arc));
        arc
    }

    /// Load a sectioned lexicon. Missing files yield an empty section map;
    /// callers fall back per category.
    pub fn load_sectioned(&self, name: &str) -> Arc<SectionedLexicon> {
        if let Some(hit) = self.sectioned.get(name) {
            return Arc::clone(&hit);
        }
        let sec = self
            .read_file(name)
            .map(|content| parse_sectioned(&content))
            .unwrap_or_default();
        if sec.is_empty() {
            debug!(lexicon = name, "sectioned vocabulary absent, defaults apply per category");
        }
        let arc = Arc::new(sec);
        self.sectioned.insert(name.to_string(), Arc::clone(&arc));
        arc
    }

    /// High-arousal word set from the optional NRC emotion file
    /// (`nrc_emotion.csv` in the lexicon directory). Empty when absent.
    pub fn nrc_arousal_words(&self) -> Arc<HashSet<String>> {
        Arc::clone(self.nrc.get_or_init(|| {
            let words = self
                .dir
                .as_ref()
                .and_then(|d| std::fs::read_to_string(d.join("nrc_emotion.csv")).ok())
                .map(|content| parse_nrc_emotion(&content))
                .unwrap_or_default();
            Arc::new(words)
        }))
    }

    fn read_file(&self, name: &str) -> Option<String> {
        let dir = self.dir.as_ref()?;
        std::fs::read_to_string(dir.join(format!("{name}.txt"))).ok()
    }
}
