//! Shared normalization primitives.
//!
//! Every signal extractor funnels its raw counts through these so that
//! scores stay in [0, 1] and short texts cannot saturate density-based
//! sub-scores on a single punctuation mark.

/// Word count at which density sub-scores reach full confidence.
pub const FULL_CONFIDENCE_WORDS: f32 = 80.0;

/// Clamp to [0, 1].
#[inline]
pub fn clamp(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Round to 2 decimals. Applied to every score that leaves an extractor.
#[inline]
pub fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

/// Map a raw count onto [0, 1] between two thresholds.
///
/// Returns 0 at `count <= low`, 1 at `count >= high`, linear in between.
/// Accepts fractional counts from weighted accumulation.
#[inline]
pub fn count_to_score(count: f32, low: f32, high: f32) -> f32 {
    if count <= low {
        0.0
    } else if count >= high {
        1.0
    } else {
        clamp((count - low) / (high - low))
    }
}

/// Confidence multiplier for density sub-scores on short texts.
///
/// Scales linearly from 0 up to 1 at [`FULL_CONFIDENCE_WORDS`] words.
#[inline]
pub fn length_confidence(word_count: usize) -> f32 {
    (word_count as f32 / FULL_CONFIDENCE_WORDS).min(1.0)
}

/// Word count with the zero case mapped to 1, so density divisions are
/// always defined.
#[inline]
pub fn effective_word_count(word_count: usize) -> f32 {
    word_count.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-0.5), 0.0);
        assert_eq!(clamp(0.5), 0.5);
        assert_eq!(clamp(1.5), 1.0);
    }

    #[test]
    fn count_to_score_exact_thresholds() {
        // Exactly 0 at or below low, exactly 1 at or above high.
        assert_eq!(count_to_score(0.0, 1.0, 4.0), 0.0);
        assert_eq!(count_to_score(1.0, 1.0, 4.0), 0.0);
        assert_eq!(count_to_score(4.0, 1.0, 4.0), 1.0);
        assert_eq!(count_to_score(9.0, 1.0, 4.0), 1.0);
    }

    #[test]
    fn count_to_score_linear_between() {
        let mid = count_to_score(2.5, 1.0, 4.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn count_to_score_monotonic() {
        let mut prev = 0.0;
        for i in 0..20 {
            let s = count_to_score(i as f32 * 0.5, 1.0, 4.0);
            assert!(s >= prev, "not monotonic at {i}");
            prev = s;
        }
    }

    #[test]
    fn count_to_score_fractional_counts() {
        // Weighted accumulations produce fractional counts.
        let s = count_to_score(1.3, 0.0, 6.0);
        assert!(s > 0.0 && s < 1.0);
    }

    #[test]
    fn length_confidence_scaling() {
        assert_eq!(length_confidence(0), 0.0);
        assert_eq!(length_confidence(40), 0.5);
        assert_eq!(length_confidence(80), 1.0);
        assert_eq!(length_confidence(500), 1.0);
    }

    #[test]
    fn effective_word_count_avoids_zero() {
        assert_eq!(effective_word_count(0), 1.0);
        assert_eq!(effective_word_count(7), 7.0);
    }

    #[test]
    fn round2_behavior() {
        assert_eq!(round2(0.333_333), 0.33);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(1.0), 1.0);
    }
}
