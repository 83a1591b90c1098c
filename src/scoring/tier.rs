//! Combined-level tier table.

/// `(threshold, score)` pairs in descending threshold order.
pub const TIER_THRESHOLDS: [(u64, u64); 6] = [(20, 20), (16, 16), (12, 12), (8, 8), (4, 4), (1, 1)];

/// Returns the score of the first tier whose threshold `level` meets.
///
/// Levels below every threshold score 0. The function is total and
/// monotonic non-decreasing in `level`.
///
/// # Examples
///
/// ```
/// use u_loadout::scoring::tier_score;
///
/// assert_eq!(tier_score(0), 0);
/// assert_eq!(tier_score(3), 1);
/// assert_eq!(tier_score(10), 8);
/// assert_eq!(tier_score(37), 20);
/// ```
pub fn tier_score(level: u64) -> u64 {
    TIER_THRESHOLDS
        .iter()
        .find(|&&(threshold, _)| level >= threshold)
        .map_or(0, |&(_, score)| score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_score(0), 0);
        assert_eq!(tier_score(1), 1);
        assert_eq!(tier_score(4), 4);
        assert_eq!(tier_score(7), 4);
        assert_eq!(tier_score(8), 8);
        assert_eq!(tier_score(11), 8);
        assert_eq!(tier_score(12), 12);
        assert_eq!(tier_score(16), 16);
        assert_eq!(tier_score(19), 16);
        assert_eq!(tier_score(20), 20);
    }

    #[test]
    fn test_low_levels_score_at_most_one() {
        for level in 0..=3 {
            assert!(tier_score(level) <= 1, "level {level}");
        }
    }

    #[test]
    fn test_table_is_descending() {
        for pair in TIER_THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }

    proptest! {
        #[test]
        fn prop_tier_monotonic(a in 0u64..200, b in 0u64..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tier_score(lo) <= tier_score(hi));
        }

        #[test]
        fn prop_tier_saturates(level in 20u64..10_000_000_000) {
            prop_assert_eq!(tier_score(level), 20);
        }
    }
}
