//! Property tests for stroke allocation.

use proptest::prelude::*;

use crate::domain::{strokes, test_gens, test_prelude, HOLES};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Allocation over a full course hands out exactly the playing handicap.
    #[test]
    fn prop_allocation_sums_to_handicap(h in test_gens::playing_handicap()) {
        let total: i32 = (1..=HOLES).map(|si| strokes(Some(h), Some(si))).sum();
        prop_assert_eq!(total, h);
    }

    /// Harder holes never receive fewer strokes than easier ones.
    #[test]
    fn prop_allocation_non_increasing_in_stroke_index(
        h in test_gens::playing_handicap(),
        si in 1i32..HOLES,
    ) {
        prop_assert!(strokes(Some(h), Some(si)) >= strokes(Some(h), Some(si + 1)));
    }

    /// Per-hole allocation differs by at most one stroke across the course.
    #[test]
    fn prop_allocation_spread_is_at_most_one(h in test_gens::playing_handicap()) {
        let per_hole: Vec<i32> = (1..=HOLES).map(|si| strokes(Some(h), Some(si))).collect();
        let max = per_hole.iter().max().copied().unwrap_or_default();
        let min = per_hole.iter().min().copied().unwrap_or_default();
        prop_assert!(max - min <= 1);
    }

    #[test]
    fn prop_allocation_deterministic(
        h in test_gens::playing_handicap(),
        si in test_gens::stroke_index(),
    ) {
        prop_assert_eq!(strokes(Some(h), Some(si)), strokes(Some(h), Some(si)));
    }
}
