//! Optional NRC emotion lexicon support.
//!
//! The NRC file is tab-separated `word<TAB>emotion<TAB>association` rows.
//! Only words positively associated with a high-arousal emotion are kept;
//! they merge into the arousal extractor's emotion set at weight 1.0.

use std::collections::HashSet;

/// Emotions treated as high-arousal.
const HIGH_AROUSAL: [&str; 3] = ["anger", "fear", "disgust"];

/// Extract high-arousal words from NRC emotion lexicon content.
pub fn parse_nrc_emotion(content: &str) -> HashSet<String> {
    let mut words = HashSet::new();
    for line in content.lines() {
        let mut parts = line.trim().split('\t');
        let (Some(word), Some(emotion), Some(flag)) = (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };
        if flag == "1" && HIGH_AROUSAL.contains(&emotion) {
            words.insert(word.to_lowercase());
        }
    }
    words
}
