//! Urgency pressure: time-pressure, scarcity, and FOMO phrase density.

use std::collections::HashSet;

use crate::lexicon::{self, LexiconStore};
use crate::matcher::count_phrases;
use crate::normalize::count_to_score;
use crate::types::MetricBreakdown;

fn section_or(
    sections: &lexicon::SectionedLexicon,
    key: &str,
    fallback: fn() -> HashSet<String>,
) -> HashSet<String> {
    match sections.get(key) {
        Some(set) if !set.is_empty() => set.clone(),
        _ => fallback(),
    }
}

pub fn analyze_urgency(text: &str, store: &LexiconStore) -> MetricBreakdown {
    let t = text.to_lowercase();
    let sections = store.load_sectioned("urgency");

    let time_set = section_or(&sections, "time_pressure", lexicon::time_pressure_phrases);
    let scarcity_set = section_or(&sections, "scarcity", lexicon::scarcity_phrases);
    let fomo_set = section_or(&sections, "fomo", lexicon::fomo_phrases);

    let time_hits = count_phrases(&t, time_set.iter().map(String::as_str));
    let scarcity_hits = count_phrases(&t, scarcity_set.iter().map(String::as_str));
    let fomo_hits = count_phrases(&t, fomo_set.iter().map(String::as_str));

    let s_time = count_to_score(time_hits as f32, 1.0, 4.0);
    let s_scarcity = count_to_score(scarcity_hits as f32, 1.0, 4.0);
    let s_fomo = count_to_score(fomo_hits as f32, 1.0, 4.0);

    MetricBreakdown::from_parts(&[
        ("time_pressure", s_time),
        ("scarcity", s_scarcity),
        ("fomo", s_fomo),
    ])
}
